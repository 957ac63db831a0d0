//! Field constraints for person records
//!
//! Validation runs at write time (create and update); reads are never
//! re-validated. The validator does not mutate candidates and is
//! deterministic.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum length for `name`.
pub const NAME_MIN_LEN: usize = 3;

/// Minimum length for `number`.
pub const NUMBER_MIN_LEN: usize = 8;

/// Phone numbers end in 2-3 digits, a hyphen, then exactly 8 digits.
/// Anchored at the end of the string only.
const NUMBER_PATTERN: &str = r"\d{2,3}-\d{8}$";

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("pattern compiles"))
}

/// A field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human readable message.
    pub message: String,
}

impl ValidationFailure {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

/// Validates candidate field values for a person record.
///
/// Applied identically on create and update. Returns the first violation
/// found: name length, then number length, then number pattern.
pub fn validate(name: &str, number: &str) -> Result<(), ValidationFailure> {
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationFailure::new(
            "name",
            format!("name `{name}` is shorter than the minimum allowed length ({NAME_MIN_LEN})"),
        ));
    }

    if number.chars().count() < NUMBER_MIN_LEN {
        return Err(ValidationFailure::new(
            "number",
            format!(
                "number `{number}` is shorter than the minimum allowed length ({NUMBER_MIN_LEN})"
            ),
        ));
    }

    if !number_pattern().is_match(number) {
        return Err(ValidationFailure::new(
            "number",
            format!("{number} is not a valid phone number"),
        ));
    }

    Ok(())
}
