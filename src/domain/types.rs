//! Strongly-typed value objects used by the checkout domain.
//!
//! These wrappers enforce basic invariants (positive identifiers, allowed
//! glass thicknesses, normalized phone numbers) so that once a value reaches
//! the workflow layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Thickness is not one of the discrete values the factory processes.
    #[error("unsupported glass thickness: {0}mm")]
    UnsupportedThickness(u32),
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(OrderId, "Unique identifier of a job-work order.");

/// Glass sheet thickness in millimetres, restricted to the values the
/// toughening line accepts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum Thickness {
    Mm4,
    Mm5,
    Mm6,
    Mm8,
    Mm10,
    Mm12,
}

impl Thickness {
    pub const ALL: [Thickness; 6] = [
        Thickness::Mm4,
        Thickness::Mm5,
        Thickness::Mm6,
        Thickness::Mm8,
        Thickness::Mm10,
        Thickness::Mm12,
    ];

    /// Constructs a thickness from a millimetre value.
    pub fn from_mm(mm: u32) -> Result<Self, TypeConstraintError> {
        match mm {
            4 => Ok(Thickness::Mm4),
            5 => Ok(Thickness::Mm5),
            6 => Ok(Thickness::Mm6),
            8 => Ok(Thickness::Mm8),
            10 => Ok(Thickness::Mm10),
            12 => Ok(Thickness::Mm12),
            other => Err(TypeConstraintError::UnsupportedThickness(other)),
        }
    }

    /// Millimetre value of this thickness.
    pub const fn mm(self) -> u32 {
        match self {
            Thickness::Mm4 => 4,
            Thickness::Mm5 => 5,
            Thickness::Mm6 => 6,
            Thickness::Mm8 => 8,
            Thickness::Mm10 => 10,
            Thickness::Mm12 => 12,
        }
    }
}

impl Display for Thickness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.mm())
    }
}

impl TryFrom<u32> for Thickness {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_mm(value)
    }
}

impl From<Thickness> for u32 {
    fn from(value: Thickness) -> Self {
        value.mm()
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (expected E.164).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it is valid and normalizes to E.164.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Free-text item notes, HTML-stripped before leaving the client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct ItemNotes(String);

impl ItemNotes {
    /// Sanitizes and trims the note text; empty input yields an empty note.
    pub fn new<S: Into<String>>(value: S) -> Self {
        let sanitized = ammonia::Builder::empty().clean(&value.into()).to_string();
        Self(sanitized.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ItemNotes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-generated reference attached to order submissions so support can
/// correlate a browser session with a server-side order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientReference(Uuid);

impl ClientReference {
    /// Generate a new random reference.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ClientReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientReference {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for ClientReference {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a decimal field defensively, collapsing any parse failure to 0.0.
///
/// The form layer feeds raw text from dimension inputs; a value the user is
/// mid-editing ("12.", "", "abc") must never abort the update, it simply
/// zeroes the field until corrected.
pub fn parse_f64_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses an integer field defensively, collapsing any parse failure to 0.
pub fn parse_u32_or_zero(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
