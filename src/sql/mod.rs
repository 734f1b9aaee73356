//! Parameterized SQL for the users table: identifiers from config only, values as binds.

mod builder;
pub use builder::*;
