pub mod prelude;

pub mod author;
