//! Storage operations for [`Author`] against the `author` table.
//!
//! Every operation takes the connection it runs on, so callers decide whether
//! it goes through the pool or inside a transaction.

use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr, sea_query::LikeExpr,
};
use tracing::{debug, error, info, warn};

use crate::entities::{author, prelude::Author as AuthorEntity};
use crate::models::validation::{self, Field, Violation};
use crate::models::{Author, AuthorError, AuthorResult, IntoAuthorId};

/// Escape character for LIKE patterns. Backslash is avoided because some
/// backends treat it specially inside string literals.
const LIKE_ESCAPE: char = '!';

// ========================================================================
// Model Conversion Helpers
// ========================================================================

impl From<&Author> for author::ActiveModel {
    fn from(a: &Author) -> Self {
        Self {
            author_id: Set(a.id().to_vec()),
            author_activation_token: Set(a.activation_token().map(str::to_string)),
            author_avatar_url: Set(a.avatar_url().to_string()),
            author_email: Set(a.email().to_string()),
            author_hash: Set(a.password_hash().to_string()),
            author_username: Set(a.username().to_string()),
        }
    }
}

impl TryFrom<author::Model> for Author {
    type Error = AuthorError;

    /// Rows are validated like any other input.
    fn try_from(row: author::Model) -> Result<Self, Self::Error> {
        Self::new(
            &row.author_id,
            row.author_activation_token.as_deref(),
            &row.author_avatar_url,
            &row.author_email,
            &row.author_hash,
            &row.author_username,
        )
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn log_write_failure(action: &str, author: &Author, err: &DbErr) {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!(
                "Rejected {} of author {} ({} / {}): duplicate key: {}",
                action,
                author.id(),
                author.username(),
                author.email(),
                detail
            );
        }
        _ => error!("Failed to {} author {}: {}", action, author.id(), err),
    }
}

// ========================================================================
// CRUD
// ========================================================================

impl Author {
    /// Inserts this author as a new row.
    ///
    /// A duplicate id, email or username is a `Persistence` error.
    pub async fn insert<C: ConnectionTrait>(&self, db: &C) -> AuthorResult<()> {
        AuthorEntity::insert(author::ActiveModel::from(self))
            .exec_without_returning(db)
            .await
            .inspect_err(|e| log_write_failure("insert", self, e))?;

        info!("Inserted author {} ({})", self.id(), self.username());
        Ok(())
    }

    /// Writes every field to the row with this author's id.
    ///
    /// Returns `false` when no such row exists.
    pub async fn update<C: ConnectionTrait>(&self, db: &C) -> AuthorResult<bool> {
        let mut changes = author::ActiveModel::from(self);
        changes.author_id = NotSet;

        let result = AuthorEntity::update_many()
            .set(changes)
            .filter(author::Column::AuthorId.eq(self.id().to_vec()))
            .exec(db)
            .await
            .inspect_err(|e| log_write_failure("update", self, e))?;

        debug!(
            "Updated author {} ({} rows)",
            self.id(),
            result.rows_affected
        );
        Ok(result.rows_affected > 0)
    }

    /// Deletes the row with this author's id. Returns `false` when it was
    /// already gone.
    pub async fn delete<C: ConnectionTrait>(&self, db: &C) -> AuthorResult<bool> {
        let result = AuthorEntity::delete_by_id(self.id().to_vec())
            .exec(db)
            .await
            .inspect_err(|e| log_write_failure("delete", self, e))?;

        if result.rows_affected > 0 {
            info!("Deleted author {}", self.id());
        }
        Ok(result.rows_affected > 0)
    }

    /// Looks an author up by primary key. A missing row is `Ok(None)`.
    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: impl IntoAuthorId,
    ) -> AuthorResult<Option<Self>> {
        let id = id.into_author_id()?;
        debug!("Looking up author {}", id);

        AuthorEntity::find_by_id(id.to_vec())
            .one(db)
            .await?
            .map(Self::try_from)
            .transpose()
    }

    /// All authors whose email contains `fragment`, ordered by email.
    ///
    /// `%`, `_` and the escape character in `fragment` match literally. The
    /// match is case-sensitive: SQLite's LIKE narrows the rows and the exact
    /// substring test runs here.
    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        fragment: &str,
    ) -> AuthorResult<std::vec::IntoIter<Self>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(Violation::invalid_format(Field::Email, "email search is empty").into());
        }

        let pattern = LikeExpr::new(format!("%{}%", escape_like(fragment))).escape(LIKE_ESCAPE);
        let rows = AuthorEntity::find()
            .filter(author::Column::AuthorEmail.like(pattern))
            .order_by_asc(author::Column::AuthorEmail)
            .all(db)
            .await?;

        let authors = rows
            .into_iter()
            .filter(|row| row.author_email.contains(fragment))
            .map(Self::try_from)
            .collect::<AuthorResult<Vec<_>>>()?;

        debug!("Email search '{}' matched {} authors", fragment, authors.len());
        Ok(authors.into_iter())
    }

    /// Exact lookup on the unique username.
    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> AuthorResult<Option<Self>> {
        let username = validation::username(username)?;

        AuthorEntity::find()
            .filter(author::Column::AuthorUsername.eq(username))
            .one(db)
            .await?
            .map(Self::try_from)
            .transpose()
    }

    /// Finds the not yet activated author holding `token`.
    pub async fn find_by_activation_token<C: ConnectionTrait>(
        db: &C,
        token: &str,
    ) -> AuthorResult<Option<Self>> {
        let Some(token) = validation::activation_token(Some(token))? else {
            return Ok(None);
        };

        AuthorEntity::find()
            .filter(author::Column::AuthorActivationToken.eq(token))
            .one(db)
            .await?
            .map(Self::try_from)
            .transpose()
    }
}
