//! Primary key of an author.
//!
//! Stored as 16 raw bytes in the `authorId` column and rendered in the
//! canonical hyphenated form (`a5c7c2f9-e8c6-4ce1-adc0-a60a0f04bff0`) everywhere
//! a human or a JSON consumer sees it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::validation::{Field, Violation};

/// Length of the canonical hyphenated rendering.
pub const CANONICAL_LEN: usize = 36;

/// 128-bit author identifier.
///
/// # Examples
///
/// ```rust
/// use authorbook::models::AuthorId;
///
/// let id: AuthorId = "a5c7c2f9-e8c6-4ce1-adc0-a60a0f04bff0".parse().unwrap();
/// assert_eq!(id.to_string(), "a5c7c2f9-e8c6-4ce1-adc0-a60a0f04bff0");
/// assert_eq!(id.as_bytes().len(), 16);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuthorId([u8; 16]);

impl AuthorId {
    /// Generates a fresh random (version 4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(*Uuid::new_v4().as_bytes())
    }

    /// Decodes the canonical hyphenated form. Braced, URN and un-hyphenated
    /// renderings are rejected.
    pub fn parse_str(value: &str) -> Result<Self, Violation> {
        let value = value.trim();
        if value.len() != CANONICAL_LEN {
            return Err(Violation::invalid_format(
                Field::Id,
                format!("identifier must be {CANONICAL_LEN} characters in canonical form"),
            ));
        }

        Uuid::try_parse(value)
            .map(|uuid| Self(*uuid.as_bytes()))
            .map_err(|e| Violation::invalid_format(Field::Id, format!("identifier is malformed: {e}")))
    }

    /// Decodes the raw 16-byte form.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Violation> {
        <[u8; 16]>::try_from(bytes).map(Self).map_err(|_| {
            Violation::invalid_format(
                Field::Id,
                format!("identifier must be 16 bytes, got {}", bytes.len()),
            )
        })
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.0)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_uuid().hyphenated(), f)
    }
}

impl fmt::Debug for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorId({self})")
    }
}

impl FromStr for AuthorId {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl From<Uuid> for AuthorId {
    fn from(uuid: Uuid) -> Self {
        Self(*uuid.as_bytes())
    }
}

impl From<AuthorId> for Uuid {
    fn from(id: AuthorId) -> Self {
        id.as_uuid()
    }
}

impl From<[u8; 16]> for AuthorId {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl Serialize for AuthorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Anything `Author::set_id` accepts: an existing id, a `Uuid`, 16 raw bytes
/// or the canonical string.
pub trait IntoAuthorId {
    fn into_author_id(self) -> Result<AuthorId, Violation>;
}

impl IntoAuthorId for AuthorId {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        Ok(self)
    }
}

impl IntoAuthorId for Uuid {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        Ok(self.into())
    }
}

impl IntoAuthorId for [u8; 16] {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        Ok(self.into())
    }
}

impl IntoAuthorId for &[u8] {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        AuthorId::from_slice(self)
    }
}

impl IntoAuthorId for &Vec<u8> {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        AuthorId::from_slice(self)
    }
}

impl IntoAuthorId for &str {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        AuthorId::parse_str(self)
    }
}

impl IntoAuthorId for String {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        AuthorId::parse_str(&self)
    }
}

impl IntoAuthorId for &String {
    fn into_author_id(self) -> Result<AuthorId, Violation> {
        AuthorId::parse_str(self)
    }
}
