//! Statement factories.
//!
//! [`QueryBuilder`] carries a shared [`BuilderConfig`] and starts every
//! statement chain. The free functions at the crate root use a builder with
//! the default configuration:
//!
//! ```ignore
//! use querykit::{BuilderConfig, QueryBuilder};
//!
//! let qb = QueryBuilder::with_config(BuilderConfig::new().with_schema("sales"));
//! assert_eq!(qb.delete::<Order>().sql(), "DELETE FROM sales.Order");
//! assert_eq!(querykit::delete::<Order>().sql(), "DELETE FROM dbo.Order");
//! ```

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::config::BuilderConfig;
use crate::entity::{Column, Entity, IntoColumn};
use crate::error::{QueryError, QueryResult};
use crate::ident::{is_id_column, resolve_entity_name, table_ref};
use crate::statement::{
    DeleteStatement, DistinctStatement, InsertStatement, JoinedStatement, SelectStatement,
    Statement, UpdateStatement,
};

/// Join flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
}

impl JoinKind {
    /// SQL keyword for this join.
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
        }
    }
}

/// Optional overrides for a join statement.
#[derive(Debug, Clone, Default)]
pub struct JoinOptions {
    /// Explicit select list; `*` when `None`.
    pub columns: Option<Vec<String>>,
    /// Table for the left (inner) entity instead of `<schema>.<L>`.
    pub inner_table: Option<String>,
    /// Table for the right (joined) entity instead of `<schema>.<R>`.
    pub join_table: Option<String>,
}

impl JoinOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select these columns instead of `*`.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_inner_table(mut self, table: impl Into<String>) -> Self {
        self.inner_table = Some(table.into());
        self
    }

    pub fn with_join_table(mut self, table: impl Into<String>) -> Self {
        self.join_table = Some(table.into());
        self
    }
}

/// Entry point for statement chains.
///
/// Cheap to clone and safe to share between threads; every statement it
/// creates gets its own SQL buffer and parameter bag.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: Arc<BuilderConfig>,
}

impl QueryBuilder {
    /// Builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a custom configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Name used for `E` in SQL, bracket-quoted when reserved.
    pub fn entity_name<E: Entity>(&self) -> String {
        resolve_entity_name(E::NAME, &self.config.reserved_names).into_owned()
    }

    /// Default table reference for `E` (`dbo.[User]`).
    pub fn table_name<E: Entity>(&self) -> String {
        table_ref(&self.config.schema, &self.entity_name::<E>())
    }

    fn start<E, S>(&self, kind: &'static str, table: &str, sql: String) -> Statement<E, S> {
        sql_debug!(kind, table, "statement started");
        #[cfg(not(feature = "tracing"))]
        let _ = (kind, table);
        Statement::from_sql(sql, Arc::clone(&self.config))
    }

    // ==================== SELECT ====================

    /// `SELECT * FROM <schema>.<E>`
    pub fn select<E: Entity>(&self) -> SelectStatement<E> {
        self.select_from(&self.table_name::<E>())
    }

    /// `SELECT * FROM <table>`
    pub fn select_from<E: Entity>(&self, table: &str) -> SelectStatement<E> {
        self.start("select", table, format!("SELECT * FROM {table}"))
    }

    /// `SELECT DISTINCT <c1>, <c2> FROM <schema>.<E>`; fails on an empty list.
    pub fn select_distinct<E, I, C>(&self, columns: I) -> QueryResult<DistinctStatement<E>>
    where
        E: Entity,
        I: IntoIterator<Item = C>,
        C: IntoColumn<E>,
    {
        self.select_distinct_from(&self.table_name::<E>(), columns)
    }

    /// `SELECT DISTINCT <c1>, <c2> FROM <table>`; fails on an empty list.
    pub fn select_distinct_from<E, I, C>(
        &self,
        table: &str,
        columns: I,
    ) -> QueryResult<DistinctStatement<E>>
    where
        E: Entity,
        I: IntoIterator<Item = C>,
        C: IntoColumn<E>,
    {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.column_name().to_string())
            .collect();
        if columns.is_empty() {
            return Err(QueryError::invalid_argument(
                "SELECT DISTINCT requires at least one column",
            ));
        }
        let sql = format!("SELECT DISTINCT {} FROM {table}", columns.join(", "));
        Ok(self.start("select_distinct", table, sql))
    }

    /// `["<E>.<f> AS <E><f>", ...]` for every declared field, as an explicit
    /// select list for joins.
    pub fn select_values<E: Entity>(&self) -> Vec<String> {
        let name = self.entity_name::<E>();
        let bare = E::NAME;
        E::FIELDS
            .iter()
            .map(|field| format!("{name}.{field} AS {bare}{field}"))
            .collect()
    }

    // ==================== INSERT / UPDATE / DELETE ====================

    /// `INSERT INTO <schema>.<E>(c1, c2) VALUES(@c1, @c2)`, without `id`.
    pub fn insert<E: Entity>(&self) -> InsertStatement<E> {
        self.insert_into(&self.table_name::<E>())
    }

    /// `INSERT INTO <table>(c1, c2) VALUES(@c1, @c2)`, without `id`.
    pub fn insert_into<E: Entity>(&self, table: &str) -> InsertStatement<E> {
        let fields = E::writable_fields();
        let placeholders: Vec<String> = fields.iter().map(|f| format!("@{f}")).collect();
        let sql = format!(
            "INSERT INTO {table}({}) VALUES({})",
            fields.join(", "),
            placeholders.join(", ")
        );
        self.start("insert", table, sql)
    }

    /// `UPDATE <schema>.<E> SET c1 = @c1, c2 = @c2`
    pub fn update<E: Entity>(&self) -> UpdateStatement<E> {
        self.update_table(&self.table_name::<E>())
    }

    /// `UPDATE <table> SET c1 = @c1, c2 = @c2`
    ///
    /// `id` is left out of the SET list unless
    /// [`BuilderConfig::exclude_id_column`] is off.
    pub fn update_table<E: Entity>(&self, table: &str) -> UpdateStatement<E> {
        let exclude_id = self.config.exclude_id_column;
        let assignments: Vec<String> = E::FIELDS
            .iter()
            .filter(|f| !(exclude_id && is_id_column(f)))
            .map(|f| format!("{f} = @{f}"))
            .collect();
        let sql = format!("UPDATE {table} SET {}", assignments.join(", "));
        self.start("update", table, sql)
    }

    /// `DELETE FROM <schema>.<E>`
    pub fn delete<E: Entity>(&self) -> DeleteStatement<E> {
        self.delete_from(&self.table_name::<E>())
    }

    /// `DELETE FROM <table>`, or `DELETE * FROM <table>` with
    /// [`BuilderConfig::legacy_delete_star`].
    pub fn delete_from<E: Entity>(&self, table: &str) -> DeleteStatement<E> {
        let sql = if self.config.legacy_delete_star {
            format!("DELETE * FROM {table}")
        } else {
            format!("DELETE FROM {table}")
        };
        self.start("delete", table, sql)
    }

    // ==================== JOIN ====================

    /// `SELECT * FROM <L> AS L JOIN <R> AS R ON L.<inner> = R.<outer>`,
    /// continuing with the right entity's columns.
    pub fn join<L: Entity, R: Entity>(
        &self,
        inner: Column<L>,
        outer: Column<R>,
    ) -> JoinedStatement<R> {
        self.join_with(JoinKind::Inner, inner, outer, &JoinOptions::default())
    }

    /// Same SQL as [`QueryBuilder::join`], continuing with the left entity.
    pub fn join_on<L: Entity, R: Entity>(
        &self,
        inner: Column<L>,
        outer: Column<R>,
    ) -> JoinedStatement<L> {
        self.join_on_with(JoinKind::Inner, inner, outer, &JoinOptions::default())
    }

    /// `LEFT JOIN` variant of [`QueryBuilder::join`].
    pub fn left_join<L: Entity, R: Entity>(
        &self,
        inner: Column<L>,
        outer: Column<R>,
    ) -> JoinedStatement<R> {
        self.join_with(JoinKind::Left, inner, outer, &JoinOptions::default())
    }

    /// `LEFT JOIN` variant of [`QueryBuilder::join_on`].
    pub fn left_join_on<L: Entity, R: Entity>(
        &self,
        inner: Column<L>,
        outer: Column<R>,
    ) -> JoinedStatement<L> {
        self.join_on_with(JoinKind::Left, inner, outer, &JoinOptions::default())
    }

    /// Join with explicit options, continuing with the right entity.
    pub fn join_with<L: Entity, R: Entity>(
        &self,
        kind: JoinKind,
        inner: Column<L>,
        outer: Column<R>,
        options: &JoinOptions,
    ) -> JoinedStatement<R> {
        let (table, sql) = self.join_sql(kind, inner, outer, options);
        self.start("join", &table, sql)
    }

    /// Join with explicit options, continuing with the left entity.
    pub fn join_on_with<L: Entity, R: Entity>(
        &self,
        kind: JoinKind,
        inner: Column<L>,
        outer: Column<R>,
        options: &JoinOptions,
    ) -> JoinedStatement<L> {
        let (table, sql) = self.join_sql(kind, inner, outer, options);
        self.start("join", &table, sql)
    }

    fn join_sql<L: Entity, R: Entity>(
        &self,
        kind: JoinKind,
        inner: Column<L>,
        outer: Column<R>,
        options: &JoinOptions,
    ) -> (String, String) {
        let left = self.entity_name::<L>();
        let right = self.entity_name::<R>();
        let left_table = options
            .inner_table
            .clone()
            .unwrap_or_else(|| table_ref(&self.config.schema, &left));
        let right_table = options
            .join_table
            .clone()
            .unwrap_or_else(|| table_ref(&self.config.schema, &right));
        let columns = match &options.columns {
            Some(columns) if !columns.is_empty() => columns.join(", "),
            _ => "*".to_string(),
        };
        let sql = format!(
            "SELECT {columns} FROM {left_table} AS {left} {} {right_table} AS {right} \
             ON {left}.{inner} = {right}.{outer}",
            kind.keyword()
        );
        (left_table, sql)
    }

    // ==================== bound models ====================

    /// `SELECT` for an instance's type. No model is attached.
    pub fn select_entity<E: Entity>(&self, _entity: &E) -> SelectStatement<E> {
        self.select()
    }

    /// `INSERT` with `entity` as the model.
    pub fn insert_entity<E: Entity + Serialize>(&self, entity: &E) -> QueryResult<InsertStatement<E>> {
        self.insert().set_model(entity)
    }

    /// `UPDATE` with `entity` as the model.
    pub fn update_entity<E: Entity + Serialize>(&self, entity: &E) -> QueryResult<UpdateStatement<E>> {
        self.update().set_model(entity)
    }

    /// `DELETE` with `entity` as the model.
    pub fn delete_entity<E: Entity + Serialize>(&self, entity: &E) -> QueryResult<DeleteStatement<E>> {
        self.delete().set_model(entity)
    }
}

/// Builder behind the crate-level free functions.
pub fn default_builder() -> &'static QueryBuilder {
    static DEFAULT: OnceLock<QueryBuilder> = OnceLock::new();
    DEFAULT.get_or_init(QueryBuilder::default)
}

/// Statement entry points on entity instances, using the default builder.
///
/// ```ignore
/// let stmt = user.update_statement()?.r#where(User::COL_ID);
/// ```
pub trait EntityExt: Entity + Serialize + Sized {
    /// `SELECT * FROM <schema>.<Self>` with no model attached.
    fn select_statement(&self) -> SelectStatement<Self> {
        default_builder().select_entity(self)
    }

    /// `INSERT` bound to this instance.
    fn insert_statement(&self) -> QueryResult<InsertStatement<Self>> {
        default_builder().insert_entity(self)
    }

    /// `UPDATE` bound to this instance.
    fn update_statement(&self) -> QueryResult<UpdateStatement<Self>> {
        default_builder().update_entity(self)
    }

    /// `DELETE` bound to this instance.
    fn delete_statement(&self) -> QueryResult<DeleteStatement<Self>> {
        default_builder().delete_entity(self)
    }
}

impl<T: Entity + Serialize> EntityExt for T {}

// ==================== default-config shortcuts ====================

/// `SELECT * FROM dbo.<E>`
pub fn select<E: Entity>() -> SelectStatement<E> {
    default_builder().select()
}

/// `SELECT * FROM <table>`
pub fn select_from<E: Entity>(table: &str) -> SelectStatement<E> {
    default_builder().select_from(table)
}

/// `SELECT DISTINCT <columns> FROM dbo.<E>`
pub fn select_distinct<E, I, C>(columns: I) -> QueryResult<DistinctStatement<E>>
where
    E: Entity,
    I: IntoIterator<Item = C>,
    C: IntoColumn<E>,
{
    default_builder().select_distinct(columns)
}

/// `SELECT DISTINCT <columns> FROM <table>`
pub fn select_distinct_from<E, I, C>(table: &str, columns: I) -> QueryResult<DistinctStatement<E>>
where
    E: Entity,
    I: IntoIterator<Item = C>,
    C: IntoColumn<E>,
{
    default_builder().select_distinct_from(table, columns)
}

/// `<E>.<f> AS <E><f>` for every field of `E`.
pub fn select_values<E: Entity>() -> Vec<String> {
    default_builder().select_values::<E>()
}

/// `INSERT INTO dbo.<E>(...) VALUES(...)`
pub fn insert<E: Entity>() -> InsertStatement<E> {
    default_builder().insert()
}

/// `INSERT INTO <table>(...) VALUES(...)`
pub fn insert_into<E: Entity>(table: &str) -> InsertStatement<E> {
    default_builder().insert_into(table)
}

/// `UPDATE dbo.<E> SET ...`
pub fn update<E: Entity>() -> UpdateStatement<E> {
    default_builder().update()
}

/// `UPDATE <table> SET ...`
pub fn update_table<E: Entity>(table: &str) -> UpdateStatement<E> {
    default_builder().update_table(table)
}

/// `DELETE FROM dbo.<E>`
pub fn delete<E: Entity>() -> DeleteStatement<E> {
    default_builder().delete()
}

/// `DELETE FROM <table>`
pub fn delete_from<E: Entity>(table: &str) -> DeleteStatement<E> {
    default_builder().delete_from(table)
}

/// Inner join, continuing with the right entity.
pub fn join<L: Entity, R: Entity>(inner: Column<L>, outer: Column<R>) -> JoinedStatement<R> {
    default_builder().join(inner, outer)
}

/// Inner join, continuing with the left entity.
pub fn join_on<L: Entity, R: Entity>(inner: Column<L>, outer: Column<R>) -> JoinedStatement<L> {
    default_builder().join_on(inner, outer)
}

/// Left join, continuing with the right entity.
pub fn left_join<L: Entity, R: Entity>(inner: Column<L>, outer: Column<R>) -> JoinedStatement<R> {
    default_builder().left_join(inner, outer)
}

/// Left join, continuing with the left entity.
pub fn left_join_on<L: Entity, R: Entity>(inner: Column<L>, outer: Column<R>) -> JoinedStatement<L> {
    default_builder().left_join_on(inner, outer)
}
