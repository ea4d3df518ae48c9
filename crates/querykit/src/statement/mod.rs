//! Type-state SQL statement chain.
//!
//! A [`Statement`] owns the SQL text built so far, an optional parameter bag
//! and the builder configuration. Every clause method consumes the statement
//! and returns it re-tagged with the [`state`] marker for the next grammar
//! position, so only legal continuations are reachable:
//!
//! ```ignore
//! use querykit::prelude::*;
//!
//! let stmt = select::<User>()
//!     .set_model(&search)?
//!     .where_like(User::COL_NAME)
//!     .and("Active")
//!     .order_by_desc(User::COL_CREATED)
//!     .page();
//!
//! assert_eq!(
//!     stmt.sql(),
//!     "SELECT * FROM dbo.[User] WHERE Name LIKE @Name AND Active = @Active \
//!      ORDER BY Created DESC OFFSET (@Offset) ROWS FETCH NEXT (@limit) ROWS ONLY"
//! );
//! ```
//!
//! Clauses are appended with one leading space and no trailing whitespace.
//! Column and parameter names are spliced verbatim; they are expected to be
//! compile-time identifiers, not user input.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BuilderConfig;
use crate::entity::{Entity, IntoColumn};
use crate::error::{QueryError, QueryResult};
use crate::ident::{quote_literal, resolve_entity_name};
use crate::params::Params;

pub mod state;

/// Statement read access shared by every position in the chain.
pub trait SqlStatement {
    /// SQL text built so far.
    fn sql(&self) -> &str;

    /// Parameter bag, if a model has been attached.
    fn params(&self) -> Option<&Params>;

    /// The bag written back onto the model's declared shape.
    fn model(&self) -> Option<Value> {
        self.params().map(Params::to_object)
    }
}

/// A SQL statement over entity `E` at grammar position `S`.
pub struct Statement<E, S> {
    sql: String,
    params: Option<Params>,
    config: Arc<BuilderConfig>,
    _state: PhantomData<fn() -> (E, S)>,
}

/// `SELECT * FROM ...`
pub type SelectStatement<E> = Statement<E, state::Select>;
/// `SELECT DISTINCT ... FROM ...`
pub type DistinctStatement<E> = Statement<E, state::Distinct>;
/// `SELECT ... JOIN ...`
pub type JoinedStatement<E> = Statement<E, state::Joined>;
/// `INSERT INTO ...`
pub type InsertStatement<E> = Statement<E, state::Insert>;
/// `UPDATE ... SET ...`
pub type UpdateStatement<E> = Statement<E, state::Update>;
/// `DELETE FROM ...`
pub type DeleteStatement<E> = Statement<E, state::Delete>;

impl<E, S> Statement<E, S> {
    pub(crate) fn from_sql(sql: String, config: Arc<BuilderConfig>) -> Self {
        Self {
            sql,
            params: None,
            config,
            _state: PhantomData,
        }
    }

    /// SQL text built so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Alias of [`Statement::sql`].
    pub fn query(&self) -> &str {
        &self.sql
    }

    /// Parameter bag, including entries the model does not declare.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// Mutable parameter bag, e.g. to add paging values.
    pub fn params_mut(&mut self) -> Option<&mut Params> {
        self.params.as_mut()
    }

    /// Current parameter values written back onto the model's declared
    /// fields. `None` until a model is attached.
    pub fn model(&self) -> Option<Value> {
        self.params.as_ref().map(Params::to_object)
    }

    /// Reconstitute the attached model as `M`.
    pub fn model_as<M: DeserializeOwned>(&self) -> QueryResult<Option<M>> {
        self.params.as_ref().map(Params::to_model).transpose()
    }

    /// Attach a model, replacing any previous bag.
    pub fn set_model<M: Serialize + ?Sized>(mut self, model: &M) -> QueryResult<Self> {
        self.params = Some(Params::from_model(model)?);
        Ok(self)
    }

    /// Attach an already-built parameter bag.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Configuration this statement was created with.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Split into SQL text and parameter bag.
    pub fn into_parts(self) -> (String, Option<Params>) {
        (self.sql, self.params)
    }

    // ==================== chain plumbing ====================

    fn retag<T>(self) -> Statement<E, T> {
        self.retag_entity()
    }

    fn retag_entity<F, T>(self) -> Statement<F, T> {
        Statement {
            sql: self.sql,
            params: self.params,
            config: self.config,
            _state: PhantomData,
        }
    }

    fn push(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.sql.write_fmt(args);
    }

    fn resolved_name<T: Entity>(&self) -> Cow<'static, str> {
        resolve_entity_name(T::NAME, &self.config.reserved_names)
    }

    /// ` <KW> <column> = @<param>`
    fn compare<T>(mut self, keyword: &str, column: &str, param: &str) -> Statement<E, T> {
        self.push(format_args!(" {keyword} {column} = @{param}"));
        self.retag()
    }

    /// ` <KW> <column> LIKE @<param>`, wrapping the bound value in `%...%`.
    fn compare_like<T>(mut self, keyword: &str, column: &str, param: &str) -> Statement<E, T> {
        self.push(format_args!(" {keyword} {column} LIKE @{param}"));
        self.wildcard(param);
        self.retag()
    }

    /// ` <KW> <column> [NOT ]IN @<values_param>`
    fn membership<T>(
        mut self,
        keyword: &str,
        column: &str,
        values_param: &str,
        negated: bool,
    ) -> Statement<E, T> {
        let op = if negated { "NOT IN" } else { "IN" };
        self.push(format_args!(" {keyword} {column} {op} @{values_param}"));
        self.retag()
    }

    /// ` <KW> <column> = '<literal>'`
    fn compare_literal<T>(mut self, keyword: &str, column: &str, literal: &str) -> Statement<E, T> {
        let literal = quote_literal(literal);
        self.push(format_args!(" {keyword} {column} = {literal}"));
        self.retag()
    }

    fn order<T>(mut self, lead: &str, column: &str, descending: bool) -> Statement<E, T> {
        let dir = if descending { " DESC" } else { "" };
        self.push(format_args!("{lead}{column}{dir}"));
        self.retag()
    }

    fn group<T, I, C>(mut self, columns: I) -> QueryResult<Statement<E, T>>
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn<E>,
    {
        let list = column_list::<E, _, _>(columns);
        if list.is_empty() {
            return Err(QueryError::invalid_argument(
                "GROUP BY requires at least one column",
            ));
        }
        self.push(format_args!(" GROUP BY {}", list.join(", ")));
        Ok(self.retag())
    }

    fn wildcard(&mut self, param: &str) {
        let policy = self.config.wildcard_policy;
        match self.params.as_mut() {
            Some(params) => {
                if params.wrap_like(param, policy) {
                    sql_trace!(param, "wrapped LIKE parameter");
                } else {
                    sql_debug!(param, ?policy, "LIKE parameter missing or already wrapped");
                }
            }
            None => {
                sql_debug!(param, "no model attached, LIKE parameter left unbound");
            }
        }
    }
}

fn column_list<E, I, C>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = C>,
    C: IntoColumn<E>,
{
    columns
        .into_iter()
        .map(|c| c.column_name().to_string())
        .collect()
}

impl<E, S> SqlStatement for Statement<E, S> {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }
}

impl<E, S> Clone for Statement<E, S> {
    fn clone(&self) -> Self {
        Self {
            sql: self.sql.clone(),
            params: self.params.clone(),
            config: Arc::clone(&self.config),
            _state: PhantomData,
        }
    }
}

impl<E, S> fmt::Debug for Statement<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("entity", &std::any::type_name::<E>())
            .field("state", &std::any::type_name::<S>())
            .field("sql", &self.sql)
            .field("params", &self.params)
            .finish()
    }
}

impl<E, S> fmt::Display for Statement<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

// ==================== shared method groups ====================

/// `WHERE` entry points on a column of the statement's own entity.
macro_rules! where_entry_methods {
    ($state:ty) => {
        impl<E> Statement<E, $state> {
            /// Append ` WHERE <column> = @<column>`.
            pub fn r#where(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare("WHERE", column, column)
            }

            /// Append ` WHERE <column> LIKE @<column>` and wrap the bound value.
            pub fn where_like(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare_like("WHERE", column, column)
            }

            /// Append ` WHERE <column> IN @<values_param>`.
            pub fn where_in(
                self,
                column: impl IntoColumn<E>,
                values_param: &str,
            ) -> Statement<E, state::Filtered> {
                self.membership("WHERE", column.column_name(), values_param, false)
            }

            /// Append ` WHERE <column> NOT IN @<values_param>`.
            pub fn where_not_in(
                self,
                column: impl IntoColumn<E>,
                values_param: &str,
            ) -> Statement<E, state::Filtered> {
                self.membership("WHERE", column.column_name(), values_param, true)
            }
        }
    };
}

/// `WHERE` comparing an entity column with a differently named model field.
macro_rules! where_by_methods {
    ($state:ty) => {
        impl<E> Statement<E, $state> {
            /// Append ` WHERE <column> = @<param>`.
            pub fn where_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare("WHERE", column.column_name(), param.name())
            }

            /// Append ` WHERE <column> LIKE @<param>` and wrap the bound value.
            pub fn where_like_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare_like("WHERE", column.column_name(), param.name())
            }
        }
    };
}

/// `AND` / `OR` continuations.
macro_rules! filter_methods {
    ($state:ty) => {
        impl<E> Statement<E, $state> {
            /// Append ` AND <column> = @<column>`.
            pub fn and(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare("AND", column, column)
            }

            /// Append ` AND <column> LIKE @<column>` and wrap the bound value.
            pub fn and_like(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare_like("AND", column, column)
            }

            /// Append ` AND <column> = @<param>`.
            pub fn and_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare("AND", column.column_name(), param.name())
            }

            /// Append ` AND <column> LIKE @<param>` and wrap the bound value.
            pub fn and_like_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare_like("AND", column.column_name(), param.name())
            }

            /// Append ` OR <column> = @<column>`.
            pub fn or(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare("OR", column, column)
            }

            /// Append ` OR <column> LIKE @<column>` and wrap the bound value.
            pub fn or_like(self, column: impl IntoColumn<E>) -> Statement<E, state::Filtered> {
                let column = column.column_name();
                self.compare_like("OR", column, column)
            }

            /// Append ` OR <column> = @<param>`.
            pub fn or_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare("OR", column.column_name(), param.name())
            }

            /// Append ` OR <column> LIKE @<param>` and wrap the bound value.
            pub fn or_like_by<M>(
                self,
                column: impl IntoColumn<E>,
                param: Column<M>,
            ) -> Statement<E, state::Filtered> {
                self.compare_like("OR", column.column_name(), param.name())
            }
        }
    };
}

/// First `ORDER BY` item.
macro_rules! order_entry_methods {
    (<$($g:ident),*> $state:ty) => {
        impl<$($g),*> Statement<E, $state> {
            /// Append ` ORDER BY <column>`.
            pub fn order_by(self, column: impl IntoColumn<E>) -> Statement<E, state::Ordered> {
                self.order(" ORDER BY ", column.column_name(), false)
            }

            /// Append ` ORDER BY <column> DESC`.
            pub fn order_by_desc(
                self,
                column: impl IntoColumn<E>,
            ) -> Statement<E, state::OrderedDesc> {
                self.order(" ORDER BY ", column.column_name(), true)
            }
        }
    };
}

/// Unchecked `GROUP BY`.
macro_rules! group_methods {
    (<$($g:ident),*> $state:ty) => {
        impl<$($g),*> Statement<E, $state> {
            /// Append ` GROUP BY <column>`.
            pub fn group_by(mut self, column: impl IntoColumn<E>) -> Statement<E, state::Grouped> {
                self.push(format_args!(" GROUP BY {}", column.column_name()));
                self.retag()
            }

            /// Append ` GROUP BY <c1>, <c2>, ...`; fails on an empty list.
            pub fn group_by_all<I, C>(self, columns: I) -> QueryResult<Statement<E, state::Grouped>>
            where
                I: IntoIterator<Item = C>,
                C: IntoColumn<E>,
            {
                self.group(columns)
            }
        }
    };
}

mod filter;
mod group;
mod join;
mod mutation;
mod order;
mod select;
