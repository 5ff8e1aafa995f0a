use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::expenses::db_types::{CreateExpense, ExpenseCategory, UpdateExpense};
use crate::utils::validation::{FieldErrors, REQUIRED, clean_text};

pub const MAX_DESCRIPTION_CHARS: usize = 255;
pub const MAX_DIGITS: u64 = 10;
pub const DECIMAL_PLACES: u64 = 2;

pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0.";
const INVALID_NUMBER: &str = "A valid number is required.";
const INVALID_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
const INVALID_STRING: &str = "Not a valid string.";

/// Raw expense fields as they arrive from a client. Unknown keys (`id`, owner) are dropped.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ExpensePayload {
    pub date: Option<Value>,
    pub category: Option<Value>,
    pub description: Option<Value>,
    pub amount: Option<Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every field must be supplied.
    Full,
    Partial,
}

/// Validates a complete expense for `owner`.
pub fn validate_new(payload: &ExpensePayload, owner: i64) -> Result<CreateExpense, FieldErrors> {
    let changes = validate_changes(payload, UpdateMode::Full)?;

    match changes {
        UpdateExpense {
            date: Some(date),
            category: Some(category),
            description: Some(description),
            amount: Some(amount),
        } => Ok(CreateExpense {
            date,
            category,
            description,
            amount,
            user_id: owner,
        }),
        _ => Err(FieldErrors::single("non_field_errors", "Incomplete expense.")),
    }
}

/// Validates whichever fields are present. In `Full` mode absent fields are errors.
pub fn validate_changes(payload: &ExpensePayload, mode: UpdateMode) -> Result<UpdateExpense, FieldErrors> {
    let required = mode == UpdateMode::Full;
    let mut errors = FieldErrors::new();

    let changes = UpdateExpense {
        date: check_field(&mut errors, "date", payload.date.as_ref(), required, parse_date),
        category: check_field(&mut errors, "category", payload.category.as_ref(), required, parse_category),
        description: check_field(&mut errors, "description", payload.description.as_ref(), required, parse_description),
        amount: check_field(&mut errors, "amount", payload.amount.as_ref(), required, parse_amount),
    };

    errors.finish(changes)
}

fn check_field<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&Value>,
    required: bool,
    parse: impl FnOnce(&Value) -> Result<T, Vec<String>>,
) -> Option<T> {
    let Some(value) = value else {
        if required {
            errors.add(field, REQUIRED);
        }
        return None;
    };

    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(messages) => {
            for message in messages {
                errors.add(field, message);
            }
            None
        }
    }
}

pub fn parse_date(value: &Value) -> Result<NaiveDate, Vec<String>> {
    value
        .as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| vec![INVALID_DATE.to_string()])
}

pub fn parse_category(value: &Value) -> Result<ExpenseCategory, Vec<String>> {
    match value {
        Value::String(raw) => raw.parse::<ExpenseCategory>().map_err(|e| vec![e.to_string()]),
        other => Err(vec![format!("\"{}\" is not a valid choice.", other)]),
    }
}

pub fn parse_description(value: &Value) -> Result<String, Vec<String>> {
    let raw = value.as_str().ok_or_else(|| vec![INVALID_STRING.to_string()])?;
    clean_text(raw, MAX_DESCRIPTION_CHARS).map_err(|e| vec![e])
}

/// Parses a positive amount with at most 2 decimals and 10 digits, rescaled to 2 decimals.
pub fn parse_amount(value: &Value) -> Result<BigDecimal, Vec<String>> {
    let raw = match value {
        Value::String(raw) => raw.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return Err(vec![INVALID_NUMBER.to_string()]),
    };

    let amount = BigDecimal::from_str(&raw).map_err(|_| vec![INVALID_NUMBER.to_string()])?;

    let mut messages = Vec::new();
    let (digits, decimals) = digit_counts(&amount);
    let max_whole_digits = MAX_DIGITS - DECIMAL_PLACES;

    if digits > MAX_DIGITS {
        messages.push(format!(
            "Ensure that there are no more than {} digits in total.",
            MAX_DIGITS
        ));
    } else if decimals > DECIMAL_PLACES {
        messages.push(format!(
            "Ensure that there are no more than {} decimal places.",
            DECIMAL_PLACES
        ));
    } else if digits - decimals > max_whole_digits {
        messages.push(format!(
            "Ensure that there are no more than {} digits before the decimal point.",
            max_whole_digits
        ));
    }

    if amount <= BigDecimal::zero() {
        messages.push(AMOUNT_NOT_POSITIVE.to_string());
    }

    if messages.is_empty() {
        Ok(amount.with_scale(DECIMAL_PLACES as i64))
    } else {
        Err(messages)
    }
}

/// (total digits, digits after the point) as written, trailing zeros included.
fn digit_counts(amount: &BigDecimal) -> (u64, u64) {
    let (unscaled, scale) = amount.as_bigint_and_exponent();
    let digits = unscaled.magnitude().to_string().len() as u64;

    if scale <= 0 {
        (digits + scale.unsigned_abs(), 0)
    } else if scale.unsigned_abs() > digits {
        (scale.unsigned_abs(), scale.unsigned_abs())
    } else {
        (digits, scale.unsigned_abs())
    }
}
