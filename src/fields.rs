// 🧾 Validated Fields - Identity fields of a tracked company
//
// Each field is an immutable newtype. The only way in is `parse`, so holding
// a value means it already passed validation.

use crate::error::{RecordError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shared plumbing for string-backed fields: accessors, Display, FromStr,
/// and the String conversions serde uses so deserialization validates too.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            pub fn is_valid(text: &str) -> bool {
                Self::parse(text).is_ok()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = RecordError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

fn starts_with_whitespace(text: &str) -> bool {
    text.chars().next().map_or(true, char::is_whitespace)
}

// ============================================================================
// NAME
// ============================================================================

/// Company name - the identity key for "same company" checks
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const CONSTRAINTS: &'static str =
        "names should only contain alphanumeric characters, spaces and & . , ' -, and should not be blank";

    pub fn parse(text: &str) -> Result<Self> {
        let allowed = |c: char| c.is_alphanumeric() || c == ' ' || "&.,'-".contains(c);

        if starts_with_whitespace(text) || !text.chars().all(allowed) {
            return Err(RecordError::invalid_format("name", Self::CONSTRAINTS));
        }
        Ok(Name(text.to_string()))
    }
}

string_field!(Name);

// ============================================================================
// PHONE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const CONSTRAINTS: &'static str =
        "phone numbers should only contain digits, and should be at least 3 digits long";

    pub fn parse(text: &str) -> Result<Self> {
        if text.len() < 3 || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(RecordError::invalid_format("phone", Self::CONSTRAINTS));
        }
        Ok(Phone(text.to_string()))
    }
}

string_field!(Phone);

// ============================================================================
// EMAIL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const CONSTRAINTS: &'static str = "emails should be of the format local-part@domain. \
        The local-part holds alphanumerics and + _ . - but may not start or end with a special character. \
        The domain is dot-separated labels of alphanumerics and hyphens, the last label at least 2 characters long";

    pub fn parse(text: &str) -> Result<Self> {
        let valid = text
            .split_once('@')
            .map_or(false, |(local, domain)| {
                Self::valid_local_part(local) && Self::valid_domain(domain)
            });

        if !valid {
            return Err(RecordError::invalid_format("email", Self::CONSTRAINTS));
        }
        Ok(Email(text.to_string()))
    }

    fn valid_local_part(local: &str) -> bool {
        let special = |c: char| "+_.-".contains(c);

        !local.is_empty()
            && local.chars().all(|c| c.is_ascii_alphanumeric() || special(c))
            && !local.starts_with(special)
            && !local.ends_with(special)
    }

    fn valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();

        let label_ok = |label: &&str| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        };

        labels.iter().all(label_ok) && labels.last().map_or(false, |last| last.len() >= 2)
    }
}

string_field!(Email);

// ============================================================================
// ROLE
// ============================================================================

/// Position applied for at the company
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    pub const CONSTRAINTS: &'static str = "roles can take any value, and should not be blank";

    pub fn parse(text: &str) -> Result<Self> {
        if starts_with_whitespace(text) {
            return Err(RecordError::invalid_format("role", Self::CONSTRAINTS));
        }
        Ok(Role(text.to_string()))
    }
}

string_field!(Role);

// ============================================================================
// RECRUITER NAME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecruiterName(String);

impl RecruiterName {
    pub const CONSTRAINTS: &'static str =
        "recruiter names should only contain alphanumeric characters and spaces, and should not be blank";

    pub fn parse(text: &str) -> Result<Self> {
        if starts_with_whitespace(text) || !text.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(RecordError::invalid_format("recruiter name", Self::CONSTRAINTS));
        }
        Ok(RecruiterName(text.to_string()))
    }
}

string_field!(RecruiterName);

// ============================================================================
// TAG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = "tag names should be alphanumeric";

    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() || !text.chars().all(char::is_alphanumeric) {
            return Err(RecordError::invalid_format("tag", Self::CONSTRAINTS));
        }
        Ok(Tag(text.to_string()))
    }
}

string_field!(Tag);

// ============================================================================
// DEADLINE
// ============================================================================

/// Application deadline, a calendar date written YYYY-MM-DD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deadline(NaiveDate);

impl Deadline {
    pub const FORMAT: &'static str = "%Y-%m-%d";
    pub const CONSTRAINTS: &'static str = "deadlines should be valid dates in the format YYYY-MM-DD";

    pub fn parse(text: &str) -> Result<Self> {
        // chrono tolerates unpadded months and days; the stored form does not
        if text.len() != 10 {
            return Err(RecordError::invalid_format("deadline", Self::CONSTRAINTS));
        }

        NaiveDate::parse_from_str(text, Self::FORMAT)
            .map(Deadline)
            .map_err(|_| RecordError::invalid_format("deadline", Self::CONSTRAINTS))
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Deadline {
    fn from(date: NaiveDate) -> Self {
        Deadline(date)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for Deadline {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Deadline {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Deadline> for String {
    fn from(value: Deadline) -> Self {
        value.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
