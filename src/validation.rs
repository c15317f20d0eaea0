use chrono::NaiveDate;

use crate::error::{GiftedError, GiftedResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> GiftedResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(GiftedError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that an event window is well-formed (end not before start).
pub fn date_range(starts_on: NaiveDate, ends_on: NaiveDate) -> GiftedResult<()> {
    if ends_on < starts_on {
        Err(GiftedError::InvalidDateRange { starts_on, ends_on })
    } else {
        Ok(())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
