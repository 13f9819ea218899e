pub mod author;
pub mod author_id;
pub mod credentials;
pub mod error;
pub mod validation;

pub use author::Author;
pub use author_id::{AuthorId, IntoAuthorId};
pub use error::{AuthorError, AuthorResult};
pub use validation::{Field, Violation, ViolationKind, Violations};
