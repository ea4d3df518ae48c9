//! # querykit
//!
//! A fluent builder for parameterized SQL statement text.
//!
//! ## Features
//!
//! - **Text only**: statements are plain SQL strings with `@name` placeholders; nothing is executed
//! - **Entity driven**: table and column names come from `#[derive(Entity)]` structs
//! - **Grammar in the types**: clause methods only exist where SQL allows them
//! - **Model binding**: any `serde::Serialize` value becomes the named parameter bag
//! - **Configurable dialect**: schema, reserved names, paging clause and LIKE policy
//!
//! ## Usage
//!
//! ```ignore
//! use querykit::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Entity, Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct User {
//!     id: i32,
//!     name: String,
//! }
//!
//! // SELECT
//! let stmt = select::<User>().r#where(User::COL_NAME);
//! assert_eq!(stmt.sql(), "SELECT * FROM dbo.[User] WHERE Name = @Name");
//!
//! // INSERT, bound to an instance
//! let user = User { id: 0, name: "alice".into() };
//! let stmt = user.insert_statement()?;
//! assert_eq!(stmt.sql(), "INSERT INTO dbo.[User](Name) VALUES(@Name)");
//!
//! // UPDATE
//! let stmt = user.update_statement()?.r#where(User::COL_ID);
//! assert_eq!(stmt.sql(), "UPDATE dbo.[User] SET Name = @Name WHERE Id = @Id");
//! # Ok::<(), querykit::QueryError>(())
//! ```

// `#[derive(Entity)]` emits `querykit::...` paths; this resolves them inside the crate.
extern crate self as querykit;

#[macro_use]
mod macros;

pub mod builder;
pub mod config;
pub mod entity;
pub mod error;
pub mod ident;
pub mod params;
pub mod prelude;
pub mod statement;

pub use builder::{
    EntityExt, JoinKind, JoinOptions, QueryBuilder, default_builder, delete, delete_from, insert,
    insert_into, join, join_on, left_join, left_join_on, select, select_distinct,
    select_distinct_from, select_from, select_values, update, update_table,
};
pub use config::{BuilderConfig, DEFAULT_PAGING_CLAUSE, DEFAULT_SCHEMA, WildcardPolicy};
pub use entity::{Column, Entity, IntoColumn};
pub use error::{QueryError, QueryResult};
pub use params::Params;
pub use statement::{
    DeleteStatement, DistinctStatement, InsertStatement, JoinedStatement, SelectStatement,
    SqlStatement, Statement, UpdateStatement, state,
};

#[cfg(feature = "derive")]
pub use querykit_derive::Entity;
