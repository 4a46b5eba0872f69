//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in bytes)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum age, in years, a user must have reached at registration
pub const MINIMUM_AGE_YEARS: f64 = 13.0;

/// Character every email address must contain
pub const EMAIL_SEPARATOR: char = '@';

// =============================================================================
// Time
// =============================================================================

/// Average year length used for age calculation
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per day (for age calculation)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar-date format accepted for dates of birth
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";
