//! Field validation for author records.
//!
//! Every check is a pure function returning either the normalized value or a
//! tagged [`Violation`]. [`Violations`] gathers several results so that
//! construction can report everything that is wrong at once.

use argon2::Algorithm;
use argon2::password_hash::PasswordHash as PhcString;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub const ACTIVATION_TOKEN_LEN: usize = 32;
pub const AVATAR_URL_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 128;
pub const EMAIL_LOCAL_MAX_LEN: usize = 64;
pub const PASSWORD_HASH_LEN: usize = 97;
pub const USERNAME_MAX_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    ActivationToken,
    AvatarUrl,
    Email,
    PasswordHash,
    Username,
}

impl Field {
    /// Column backing this field in the `author` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "authorId",
            Self::ActivationToken => "authorActivationToken",
            Self::AvatarUrl => "authorAvatarUrl",
            Self::Email => "authorEmail",
            Self::PasswordHash => "authorHash",
            Self::Username => "authorUsername",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "author id",
            Self::ActivationToken => "activation token",
            Self::AvatarUrl => "avatar url",
            Self::Email => "email",
            Self::PasswordHash => "password hash",
            Self::Username => "username",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Malformed, empty or insecure content.
    InvalidFormat,
    /// Length outside what the column holds.
    OutOfRange,
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn invalid_format(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ViolationKind::InvalidFormat,
            message: message.into(),
        }
    }

    pub fn out_of_range(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ViolationKind::OutOfRange,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for Violation {}

/// Accumulates the outcome of several checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records the violation if `result` failed and hands back the value otherwise.
    pub fn check<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.0.push(violation);
                None
            }
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.0.iter().find(|v| v.field == field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub(crate) fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Strips markup and control characters and encodes quotes.
///
/// `&` is left alone, so sanitizing an already sanitized value changes nothing.
#[must_use]
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;

    for c in value.trim().chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out.trim().to_string()
}

fn sanitized_text(field: Field, value: &str, max_len: usize) -> Result<String, Violation> {
    let value = sanitize(value);
    if value.is_empty() {
        return Err(Violation::invalid_format(
            field,
            format!("{field} is empty or insecure"),
        ));
    }

    let len = value.chars().count();
    if len > max_len {
        return Err(Violation::out_of_range(
            field,
            format!("{field} is {len} characters, at most {max_len} allowed"),
        ));
    }

    Ok(value)
}

pub fn activation_token(value: Option<&str>) -> Result<Option<String>, Violation> {
    let Some(value) = value else {
        return Ok(None);
    };

    let token = value.trim().to_ascii_lowercase();
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Violation::invalid_format(
            Field::ActivationToken,
            "activation token must be hexadecimal",
        ));
    }

    if token.len() != ACTIVATION_TOKEN_LEN {
        return Err(Violation::out_of_range(
            Field::ActivationToken,
            format!(
                "activation token must be {ACTIVATION_TOKEN_LEN} characters, got {}",
                token.len()
            ),
        ));
    }

    Ok(Some(token))
}

pub fn avatar_url(value: &str) -> Result<String, Violation> {
    sanitized_text(Field::AvatarUrl, value, AVATAR_URL_MAX_LEN)
}

pub fn username(value: &str) -> Result<String, Violation> {
    sanitized_text(Field::Username, value, USERNAME_MAX_LEN)
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
            r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
        ))
        .expect("Invalid email regex")
    })
}

pub fn email(value: &str) -> Result<String, Violation> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Violation::invalid_format(Field::Email, "email is empty"));
    }

    let len = value.chars().count();
    if len > EMAIL_MAX_LEN {
        return Err(Violation::out_of_range(
            Field::Email,
            format!("email is {len} characters, at most {EMAIL_MAX_LEN} allowed"),
        ));
    }

    let local_ok = value
        .split_once('@')
        .is_some_and(|(local, _)| local.len() <= EMAIL_LOCAL_MAX_LEN);
    if !local_ok || !email_regex().is_match(value) {
        return Err(Violation::invalid_format(
            Field::Email,
            format!("'{value}' is not a valid email address"),
        ));
    }

    Ok(value.to_string())
}

/// Accepts hex digests and Argon2 PHC strings, both exactly
/// [`PASSWORD_HASH_LEN`] characters long.
pub fn password_hash(value: &str) -> Result<String, Violation> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Violation::invalid_format(
            Field::PasswordHash,
            "password hash is empty or insecure",
        ));
    }

    let len = value.chars().count();
    if len != PASSWORD_HASH_LEN {
        return Err(Violation::out_of_range(
            Field::PasswordHash,
            format!("password hash must be {PASSWORD_HASH_LEN} characters, got {len}"),
        ));
    }

    if value.bytes().all(|b| b.is_ascii_hexdigit()) || is_argon2_phc(value) {
        Ok(value.to_string())
    } else {
        Err(Violation::invalid_format(
            Field::PasswordHash,
            "password hash is neither hexadecimal nor an argon2 hash",
        ))
    }
}

fn is_argon2_phc(value: &str) -> bool {
    PhcString::new(value).is_ok_and(|phc| Algorithm::new(phc.algorithm.as_str()).is_ok())
}
