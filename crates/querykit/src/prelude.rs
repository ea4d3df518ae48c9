//! Convenient imports for typical `querykit` usage.
//!
//! ```ignore
//! use querykit::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, Column, Entity, EntityExt, IntoColumn, Params, QueryBuilder, QueryError,
    QueryResult, SqlStatement, Statement, delete, insert, join, join_on, left_join, left_join_on,
    select, select_distinct, update,
};
