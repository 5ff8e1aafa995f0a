use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use expense_tracker_backend::action_router::{ActionRouterInput, ActionRouterOutput};
use expense_tracker_backend::auth::Principal;
use expense_tracker_backend::cli_helper::{call_action_router, initialize_app_config};
use expense_tracker_backend::cli_utils::{format_record, format_table, print_error, print_info, print_success};
use expense_tracker_backend::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use expense_tracker_backend::users::processor_enums::{
    GetUserInputArgs, RegisterUserInputArgs, UsersProcessorInput, UsersProcessorOutput,
};
use expense_tracker_backend::utils::app_config::AppConfig;
use expense_tracker_backend::utils::db::{get_conn, run_migrations};

#[derive(Parser, Debug)]
#[command(name = "expense-cli", about = "Operator tasks for the expense tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the bundled database schema
    Migrate,
    /// Register a user, prompting for the password
    CreateUser {
        username: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Print every expense owned by a user
    ListExpenses { username: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    eprintln!("{}", "Expense Tracker CLI".bright_cyan().bold());

    let app_config = match initialize_app_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(&format!("Failed to initialize app config: {}", e));
            return Err(e);
        }
    };

    let result = match cli.command {
        Command::Migrate => migrate(&app_config),
        Command::CreateUser { username, email } => create_user(&app_config, username, email).await,
        Command::ListExpenses { username } => list_expenses(&app_config, username).await,
    };

    if let Err(e) = &result {
        print_error(&format!("{:#}", e));
    }

    result
}

fn migrate(app_config: &AppConfig) -> Result<()> {
    let mut conn = get_conn(app_config.pool.clone())?;
    let applied = run_migrations(&mut conn)?;

    for name in applied {
        print_info(&format!("Applied {}", name));
    }
    print_success("Schema is up to date");

    Ok(())
}

async fn create_user(app_config: &AppConfig, username: String, email: Option<String>) -> Result<()> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let input = ActionRouterInput::Users(UsersProcessorInput::Register(RegisterUserInputArgs {
        username: Some(username),
        email,
        password2: Some(password.clone()),
        password: Some(password),
    }));

    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Users(UsersProcessorOutput::Register(user)) => {
            print_success("User created");
            eprintln!(
                "{}",
                format_record(&[
                    ("id", user.id.to_string()),
                    ("username", user.username),
                    ("email", user.email.unwrap_or_default()),
                    ("date_joined", user.date_joined.to_string()),
                ])
            );
            Ok(())
        }
        other => Err(anyhow!("Unexpected output: {:?}", other)),
    }
}

async fn list_expenses(app_config: &AppConfig, username: String) -> Result<()> {
    let lookup = ActionRouterInput::Users(UsersProcessorInput::GetUser(GetUserInputArgs::ByUsername(username.clone())));

    let user = match call_action_router(lookup, app_config.clone()).await? {
        ActionRouterOutput::Users(UsersProcessorOutput::GetUser(user)) => user,
        other => return Err(anyhow!("Unexpected output: {:?}", other)),
    };

    let input = ActionRouterInput::Expenses(Principal::new(user.id), ExpensesProcessorInput::GetExpenses);

    let expenses = match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::GetExpenses(expenses)) => expenses,
        other => return Err(anyhow!("Unexpected output: {:?}", other)),
    };

    if expenses.is_empty() {
        print_info(&format!("{} has no expenses", username));
        return Ok(());
    }

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category.to_string(),
                expense.description.clone(),
                expense.amount.to_string(),
            ]
        })
        .collect();

    println!("{}", format_table(&["id", "date", "category", "description", "amount"], &rows));
    print_info(&format!("{} expense(s)", expenses.len()));

    Ok(())
}
