use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const NULL_CHARACTERS: &str = "Null characters are not allowed.";

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{}", describe(.0))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Ok(value) when nothing was recorded, the collected errors otherwise.
    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

fn describe(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Trims a text value and checks it is non-blank, NUL-free and within a character limit.
pub fn clean_text(raw: &str, max_chars: usize) -> Result<String, String> {
    if raw.contains('\0') {
        return Err(NULL_CHARACTERS.to_string());
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BLANK.to_string());
    }

    if trimmed.chars().count() > max_chars {
        return Err(format!(
            "Ensure this field has no more than {} characters.",
            max_chars
        ));
    }

    Ok(trimmed.to_string())
}
