//! The author record: validated fields with setters that re-validate.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::author_id::{AuthorId, IntoAuthorId};
use super::error::AuthorResult;
use super::validation::{self, Field, Violations};

/// A user account of the blog.
///
/// Every field is checked on the way in, so a value of this type is always
/// fit for the `author` table. The password hash is never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    activation_token: Option<String>,
    avatar_url: String,
    email: String,
    password_hash: String,
    username: String,
}

impl Author {
    /// Builds an author, validating every field.
    ///
    /// Nothing is constructed unless all fields pass. A single bad field is
    /// reported as its own `InvalidFormat`/`OutOfRange` error, several as
    /// `AuthorError::Invalid` listing each of them.
    pub fn new(
        id: impl IntoAuthorId,
        activation_token: Option<&str>,
        avatar_url: &str,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> AuthorResult<Self> {
        let mut violations = Violations::new();

        let id = violations.check(id.into_author_id());
        let activation_token = violations.check(validation::activation_token(activation_token));
        let avatar_url = violations.check(validation::avatar_url(avatar_url));
        let email = violations.check(validation::email(email));
        let password_hash = violations.check(validation::password_hash(password_hash));
        let username = violations.check(validation::username(username));

        match (id, activation_token, avatar_url, email, password_hash, username) {
            (
                Some(id),
                Some(activation_token),
                Some(avatar_url),
                Some(email),
                Some(password_hash),
                Some(username),
            ) => Ok(Self {
                id,
                activation_token,
                avatar_url,
                email,
                password_hash,
                username,
            }),
            _ => Err(violations.into()),
        }
    }

    #[must_use]
    pub const fn id(&self) -> AuthorId {
        self.id
    }

    pub fn set_id(&mut self, id: impl IntoAuthorId) -> AuthorResult<()> {
        self.id = id.into_author_id()?;
        Ok(())
    }

    #[must_use]
    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    /// `None` clears the token.
    pub fn set_activation_token(&mut self, token: Option<&str>) -> AuthorResult<()> {
        self.activation_token = validation::activation_token(token)?;
        Ok(())
    }

    /// Marks the account as activated by dropping its token.
    pub fn activate(&mut self) {
        self.activation_token = None;
    }

    #[must_use]
    pub const fn is_activated(&self) -> bool {
        self.activation_token.is_none()
    }

    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn set_avatar_url(&mut self, avatar_url: &str) -> AuthorResult<()> {
        self.avatar_url = validation::avatar_url(avatar_url)?;
        Ok(())
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) -> AuthorResult<()> {
        self.email = validation::email(email)?;
        Ok(())
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Stores already hashed material; see `credentials::hash_password`.
    pub fn set_password_hash(&mut self, password_hash: &str) -> AuthorResult<()> {
        self.password_hash = validation::password_hash(password_hash)?;
        Ok(())
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: &str) -> AuthorResult<()> {
        self.username = validation::username(username)?;
        Ok(())
    }

    /// Field name to value, keyed by column name, without the password hash.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            Field::Id.column().to_string(),
            Value::String(self.id.to_string()),
        );
        map.insert(
            Field::ActivationToken.column().to_string(),
            self.activation_token
                .clone()
                .map_or(Value::Null, Value::String),
        );
        map.insert(
            Field::AvatarUrl.column().to_string(),
            Value::String(self.avatar_url.clone()),
        );
        map.insert(
            Field::Email.column().to_string(),
            Value::String(self.email.clone()),
        );
        map.insert(
            Field::Username.column().to_string(),
            Value::String(self.username.clone()),
        );
        map
    }
}

impl Serialize for Author {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

impl fmt::Debug for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.id)
            .field("activation_token", &self.activation_token)
            .field("avatar_url", &self.avatar_url)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .field("username", &self.username)
            .finish()
    }
}
