use std::fmt;
use std::io::Write;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::expenses as ExpensesTable;

/// Stored as its variant name in a varchar column.
#[derive(AsExpression, FromSqlRow, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[diesel(sql_type = Text)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Healthcare,
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a valid choice.")]
pub struct UnknownCategory(pub String);

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl ToSql<Text, Pg> for ExpenseCategory {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for ExpenseCategory {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Ok(raw.parse::<ExpenseCategory>()?)
    }
}

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: BigDecimal,
    pub user_id: i64,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
pub struct CreateExpense {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: BigDecimal,
    pub user_id: i64,
}

/// Changes for an existing expense. `None` leaves the column untouched.
#[derive(Serialize, Deserialize, AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = ExpensesTable)]
pub struct UpdateExpense {
    pub date: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub amount: Option<BigDecimal>,
}

impl UpdateExpense {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
    }

    pub fn apply_to(&self, record: &mut ExpenseRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(amount) = &self.amount {
            record.amount = amount.clone();
        }
    }
}
