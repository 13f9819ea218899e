pub use super::author::Entity as Author;
