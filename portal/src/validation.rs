//! Field validators shared by the portal forms.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use payloads::requests::OTP_LEN;
use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 16;
pub const COMPANY_NAME_MIN_LEN: usize = 3;
pub const COMPANY_NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Egyptian mobile numbers.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^01[0125][0-9]{8}$").expect("phone pattern is valid")
});

static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?([\da-z\u{A0}-\u{FFFF}.-]+)\.([a-z.]{2,})([/\w .-]*)*/?$",
    )
    .expect("website pattern is valid")
});

/// Validation result for passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    TooLong,
    /// Something outside printable ASCII.
    InvalidCharacters,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate a password against the portal policy.
///
/// Rules:
/// - 8-16 characters
/// - printable ASCII only (space included)
/// - at least one uppercase letter, lowercase letter, digit and ASCII
///   punctuation symbol
pub fn validate_password(password: &str) -> PasswordValidation {
    if password.chars().any(|c| !(' '..='~').contains(&c)) {
        return PasswordValidation::InvalidCharacters;
    }
    if password.len() < PASSWORD_MIN_LEN {
        return PasswordValidation::TooShort;
    }
    if password.len() > PASSWORD_MAX_LEN {
        return PasswordValidation::TooLong;
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordValidation::MissingUppercase;
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordValidation::MissingLowercase;
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordValidation::MissingDigit;
    }
    if !password.chars().any(|c| c.is_ascii_punctuation()) {
        return PasswordValidation::MissingSymbol;
    }
    PasswordValidation::Valid
}

pub fn password_meets_policy(password: &str) -> bool {
    validate_password(password).is_valid()
}

/// Group-level check: both password fields hold the same string.
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    email.len() <= EMAIL_MAX_LEN
        && local.len() <= EMAIL_LOCAL_MAX_LEN
        && EMAIL.is_match(email)
}

pub fn is_valid_otp(otp: &str) -> bool {
    otp.chars().count() == OTP_LEN
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

pub fn is_valid_website(url: &str) -> bool {
    WEBSITE.is_match(url)
}

/// Why a single field is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort,
    TooLong,
    /// The OTP doesn't have exactly [`OTP_LEN`] characters.
    WrongLength,
    /// The password doesn't meet [`validate_password`].
    WeakPassword,
    InvalidFormat,
}

/// Errors that involve more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupError {
    PasswordMismatch,
}

/// Result of validating a whole form: at most one error per field plus the
/// group-level error, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    fields: BTreeMap<F, FieldError>,
    group: Option<GroupError>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            group: None,
        }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    /// Record an error unless the field already has one; checks run in
    /// priority order.
    pub fn add(&mut self, field: F, error: FieldError) {
        self.fields.entry(field).or_insert(error);
    }

    pub fn set_group(&mut self, error: GroupError) {
        self.group = Some(error);
    }

    pub fn field(&self, field: F) -> Option<FieldError> {
        self.fields.get(&field).copied()
    }

    pub fn group(&self) -> Option<GroupError> {
        self.group
    }

    pub fn fields(&self) -> impl Iterator<Item = (F, FieldError)> + '_ {
        self.fields.iter().map(|(field, error)| (*field, *error))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.group.is_none()
    }
}
