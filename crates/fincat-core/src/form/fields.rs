//! Form fields and their synchronous validation rules.

use std::fmt;

use chrono::{Local, NaiveDate};

/// Minimum name length in characters.
pub const MIN_NAME_LENGTH: usize = 5;
/// Maximum name length in characters.
pub const MAX_NAME_LENGTH: usize = 100;
/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Date input format for the release date field.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// The editable fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Description,
    Logo,
    ReleaseDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Description => "description",
            Field::Logo => "logo",
            Field::ReleaseDate => "release date",
        };
        write!(f, "{name}")
    }
}

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    Required,
    /// Too few characters.
    TooShort { min: usize },
    /// Too many characters.
    TooLong { max: usize },
    /// Not a parseable calendar date.
    InvalidDate,
    /// The release date lies before today.
    BeforeToday,
    /// The id is already taken in the catalog.
    IdExists,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "is required"),
            FieldError::TooShort { min } => write!(f, "must be at least {min} characters"),
            FieldError::TooLong { max } => write!(f, "must be at most {max} characters"),
            FieldError::InvalidDate => write!(f, "is not a valid date (expected YYYY-MM-DD)"),
            FieldError::BeforeToday => write!(f, "must not be before today"),
            FieldError::IdExists => write!(f, "is already in use"),
        }
    }
}

/// Validate a required text field with length bounds, counted in chars.
pub(crate) fn validate_text(value: &str, min: usize, max: usize) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    let length = value.chars().count();
    if length < min {
        Some(FieldError::TooShort { min })
    } else if length > max {
        Some(FieldError::TooLong { max })
    } else {
        None
    }
}

/// Validate a field that only has to be non-empty.
pub(crate) fn validate_required(value: &str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required)
}

/// Parse release date input of the form `YYYY-MM-DD`.
pub(crate) fn parse_release_date(value: &str) -> Result<NaiveDate, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

/// Date-only comparison against a fresh "today" captured per call.
pub(crate) fn before_today(date: NaiveDate) -> bool {
    date < Local::now().date_naive()
}
