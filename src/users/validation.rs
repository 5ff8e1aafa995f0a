use crate::users::processor_enums::RegisterUserInputArgs;
use crate::utils::validation::{BLANK, FieldErrors, NULL_CHARACTERS, REQUIRED, clean_text};

pub const MAX_USERNAME_CHARS: usize = 150;
pub const MAX_EMAIL_CHARS: usize = 254;
pub const MIN_PASSWORD_CHARS: usize = 8;

const INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const PASSWORD_MISMATCH: &str = "Password fields didn't match.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

pub fn validate_registration(args: &RegisterUserInputArgs) -> Result<ValidRegistration, FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = match args.username.as_deref() {
        None => {
            errors.add("username", REQUIRED);
            None
        }
        Some(raw) => match clean_text(raw, MAX_USERNAME_CHARS) {
            Ok(name) if name.chars().all(is_username_char) => Some(name),
            Ok(_) => {
                errors.add("username", INVALID_USERNAME);
                None
            }
            Err(message) => {
                errors.add("username", message);
                None
            }
        },
    };

    let email = match args.email.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) if raw.contains('\0') => {
            errors.add("email", NULL_CHARACTERS);
            None
        }
        Some(raw) if raw.chars().count() > MAX_EMAIL_CHARS => {
            errors.add(
                "email",
                format!("Ensure this field has no more than {} characters.", MAX_EMAIL_CHARS),
            );
            None
        }
        Some(raw) if is_plausible_email(raw) => Some(raw.to_string()),
        Some(_) => {
            errors.add("email", INVALID_EMAIL);
            None
        }
    };

    let password = match args.password.as_deref() {
        None => {
            errors.add("password", REQUIRED);
            None
        }
        Some(raw) if raw.trim().is_empty() => {
            errors.add("password", BLANK);
            None
        }
        Some(raw) if raw.contains('\0') => {
            errors.add("password", NULL_CHARACTERS);
            None
        }
        Some(raw) if raw.chars().count() < MIN_PASSWORD_CHARS => {
            errors.add(
                "password",
                format!(
                    "This password is too short. It must contain at least {} characters.",
                    MIN_PASSWORD_CHARS
                ),
            );
            None
        }
        Some(raw) => Some(raw.to_string()),
    };

    // The confirmation is only compared once the password itself is acceptable.
    let password = match (password, args.password2.as_deref()) {
        (_, None) => {
            errors.add("password2", REQUIRED);
            None
        }
        (Some(password), Some(confirmation)) if password != confirmation => {
            errors.add("password", PASSWORD_MISMATCH);
            None
        }
        (password, Some(_)) => password,
    };

    match (username, password) {
        (Some(username), Some(password)) if errors.is_empty() => Ok(ValidRegistration {
            username,
            email,
            password,
        }),
        _ => Err(errors),
    }
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

fn is_plausible_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !raw.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
