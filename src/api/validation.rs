use crate::api::error::ApiError;

/// Path ids that are not positive integers cannot name a record.
pub fn parse_record_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::not_found(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("17", "Expense").unwrap(), 17);
        assert!(parse_record_id("abc", "Expense").is_err());
        assert!(parse_record_id("-1", "Expense").is_err());
        assert!(parse_record_id("", "Expense").is_err());
    }
}
