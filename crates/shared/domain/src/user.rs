//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::constants::{
    DATE_OF_BIRTH_FORMAT, DAYS_PER_YEAR, EMAIL_SEPARATOR, MINIMUM_AGE_YEARS, MIN_PASSWORD_LENGTH,
    SECONDS_PER_DAY,
};
use crate::error::{DomainError, DomainResult};
use crate::password::PasswordHasher;

/// Raw input for constructing a [`User`].
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub date_of_birth: DateTime<Utc>,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// User domain entity (aggregate root).
///
/// Only obtainable through [`User::new`], so every instance satisfies the
/// registration rules.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    email: String,
    username: String,
    password_hash: String,
    date_of_birth: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("date_of_birth", &self.date_of_birth)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Validate the input and build a new user.
    ///
    /// Rules are checked in a fixed order and the first violation is
    /// returned. The password is hashed only once every other rule passed,
    /// and a hashing failure is returned as the hasher reported it.
    pub fn new(params: NewUser, hasher: &dyn PasswordHasher) -> DomainResult<Self> {
        let now = Utc::now();

        validate_email(&params.email)?;
        validate_username(&params.username)?;
        validate_password(&params.password)?;
        validate_date_of_birth(params.date_of_birth, now)?;

        let password_hash = hasher.hash(&params.password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            email: params.email,
            username: params.username,
            password_hash,
            date_of_birth: params.date_of_birth,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn date_of_birth(&self) -> DateTime<Utc> {
        self.date_of_birth
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check a plaintext password against the stored hash.
    pub fn verify_password(
        &self,
        plaintext: &str,
        hasher: &dyn PasswordHasher,
    ) -> DomainResult<bool> {
        hasher.compare(&self.password_hash, plaintext)
    }
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::EmailRequired);
    }

    if !email.contains(EMAIL_SEPARATOR) {
        return Err(DomainError::InvalidEmailFormat);
    }

    Ok(())
}

fn validate_username(username: &str) -> DomainResult<()> {
    if username.is_empty() {
        return Err(DomainError::UsernameRequired);
    }
    Ok(())
}

fn validate_password(password: &str) -> DomainResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooShort);
    }
    Ok(())
}

fn validate_date_of_birth(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> DomainResult<()> {
    if date_of_birth > now || age_in_years(date_of_birth, now) < MINIMUM_AGE_YEARS {
        return Err(DomainError::MinimumAgeViolation);
    }
    Ok(())
}

/// Age at `now`, in average-length (365.25 day) years.
fn age_in_years(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(date_of_birth).num_seconds() as f64;
    elapsed / (DAYS_PER_YEAR * SECONDS_PER_DAY as f64)
}

/// Parse a date of birth given either as RFC 3339 or as a plain
/// `YYYY-MM-DD` calendar date (midnight UTC).
pub fn parse_date_of_birth(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn deserialize_date_of_birth<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_of_birth(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date of birth: {}", raw)))
}

/// User creation data transfer object
#[derive(Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User email address
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
    /// User name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "johndoe"))]
    pub username: String,
    /// User password (minimum 8 characters)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "12345678"))]
    pub password: String,
    /// Date of birth, `YYYY-MM-DD` or RFC 3339
    #[serde(rename = "dob", deserialize_with = "deserialize_date_of_birth")]
    pub date_of_birth: DateTime<Utc>,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

impl From<CreateUser> for NewUser {
    fn from(req: CreateUser) -> Self {
        Self {
            email: req.email,
            username: req.username,
            password: req.password,
            date_of_birth: req.date_of_birth,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// User name
    pub username: String,
    /// Date of birth
    #[serde(rename = "dob")]
    pub date_of_birth: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            date_of_birth: user.date_of_birth,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            date_of_birth: user.date_of_birth,
        }
    }
}
