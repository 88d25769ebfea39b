//! Activity record and its line codec.
//!
//! # Responsibility
//! - Define the activity record (description, completion flag, due date).
//! - Serialize/deserialize one activity per delimited text line.
//!
//! # Invariants
//! - The line format is `description;<0|1>;<decimal epoch seconds>`.
//! - The description is not escaped: a `;` inside it breaks round-tripping.
//!   This is a documented limitation of the format, not handled here.
//! - Parsing the completed flag is lenient: `"1"` means completed, any other
//!   value means not completed.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field delimiter of the persisted line format.
pub const FIELD_DELIMITER: char = ';';

/// Single task record owned by an [`crate::ActivityList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form display text. Not escaped by the codec.
    pub description: String,
    /// Completion flag, `false` on construction.
    pub completed: bool,
    /// Unix epoch seconds. `0` means the due date is unset.
    pub due_date: i64,
}

/// Parse error for one serialized activity line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityParseError {
    /// The line splits into fewer than three `;`-separated fields.
    MissingFields,
    /// The due-date field is empty or contains a non-digit character.
    InvalidDueDate(String),
}

impl Display for ActivityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => {
                write!(f, "malformed activity line: expected three `;`-separated fields")
            }
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`: expected decimal digits")
            }
        }
    }
}

impl Error for ActivityParseError {}

impl Activity {
    /// Creates a pending activity with an unset due date.
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_details(description, false, 0)
    }

    /// Creates an activity with explicit completion flag and due date.
    pub fn with_details(description: impl Into<String>, completed: bool, due_date: i64) -> Self {
        Self {
            description: description.into(),
            completed,
            due_date,
        }
    }

    /// Serializes this activity as one line of the flat-file format.
    ///
    /// # Contract
    /// - Output is `description;<0|1>;<decimal epoch seconds>`.
    /// - No trailing newline; the store appends one per record.
    pub fn serialize_line(&self) -> String {
        format!(
            "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
            self.description,
            if self.completed { "1" } else { "0" },
            self.due_date
        )
    }

    /// Parses one line of the flat-file format back into an activity.
    ///
    /// # Errors
    /// - [`ActivityParseError::MissingFields`] when the line has fewer than
    ///   three fields.
    /// - [`ActivityParseError::InvalidDueDate`] when the due-date field is
    ///   empty or non-numeric.
    pub fn parse_line(line: &str) -> Result<Self, ActivityParseError> {
        // splitn keeps any extra delimiters inside the due-date field, where
        // the digit check below rejects them.
        let mut fields = line.splitn(3, FIELD_DELIMITER);
        let description = fields.next().ok_or(ActivityParseError::MissingFields)?;
        let completed_flag = fields.next().ok_or(ActivityParseError::MissingFields)?;
        let due_date_digits = fields.next().ok_or(ActivityParseError::MissingFields)?;

        if due_date_digits.is_empty()
            || !due_date_digits.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(ActivityParseError::InvalidDueDate(
                due_date_digits.to_string(),
            ));
        }
        let due_date = due_date_digits
            .parse::<i64>()
            .map_err(|_| ActivityParseError::InvalidDueDate(due_date_digits.to_string()))?;

        Ok(Self {
            description: description.to_string(),
            completed: completed_flag == "1",
            due_date,
        })
    }
}

/// Renders an epoch-seconds due date for display.
///
/// A due date of `0` renders as the epoch itself; the stored model does not
/// distinguish "unset" from a real epoch-zero date.
pub fn format_due_date(due_date: i64) -> String {
    match DateTime::from_timestamp(due_date, 0) {
        Some(moment) => moment.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{due_date}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_due_date, Activity, ActivityParseError};

    #[test]
    fn new_sets_defaults() {
        let activity = Activity::new("write report");
        assert_eq!(activity.description, "write report");
        assert!(!activity.completed);
        assert_eq!(activity.due_date, 0);
    }

    #[test]
    fn serialize_line_uses_expected_shape() {
        let activity = Activity::with_details("ship release", true, 1_700_000_000);
        assert_eq!(activity.serialize_line(), "ship release;1;1700000000");
    }

    #[test]
    fn parse_line_rejects_two_fields() {
        let err = Activity::parse_line("only;1").expect_err("two fields must be rejected");
        assert_eq!(err, ActivityParseError::MissingFields);
    }

    #[test]
    fn parse_line_rejects_non_digit_due_date() {
        let err = Activity::parse_line("task;0;17x0").expect_err("non-digit date must fail");
        assert!(matches!(err, ActivityParseError::InvalidDueDate(_)));
    }

    #[test]
    fn completed_flag_is_lenient() {
        let parsed = Activity::parse_line("task;yes;0").expect("lenient flag should parse");
        assert!(!parsed.completed);
    }

    #[test]
    fn format_due_date_renders_epoch_seconds() {
        assert_eq!(format_due_date(1_700_000_000), "2023-11-14 22:13");
        assert_eq!(format_due_date(0), "1970-01-01 00:00");
    }
}
