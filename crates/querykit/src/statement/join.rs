use super::{Statement, state};
use crate::builder::JoinKind;
use crate::entity::{Column, Entity, IntoColumn};
use crate::error::QueryResult;
use crate::ident::table_ref;

where_entry_methods!(state::Joined);
order_entry_methods!(<E> state::Joined);
group_methods!(<E> state::Joined);

impl<E: Entity> Statement<E, state::Joined> {
    /// Append ` WHERE <E>.<column> = @<param>`, qualifying the column with
    /// this statement's entity. Follow-up conditions name their own table.
    pub fn where_by<M>(
        self,
        column: impl IntoColumn<E>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = format!("{}.{}", self.resolved_name::<E>(), column.column_name());
        self.compare("WHERE", &qualified, param.name())
    }

    /// Append ` WHERE <E>.<column> LIKE @<param>` and wrap the bound value.
    pub fn where_like_by<M>(
        self,
        column: impl IntoColumn<E>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = format!("{}.{}", self.resolved_name::<E>(), column.column_name());
        self.compare_like("WHERE", &qualified, param.name())
    }

    // ==================== chained joins ====================

    /// Append ` JOIN <schema>.<T> AS <T> ON <E>.<inner> = <T>.<outer>`.
    pub fn join<T: Entity>(self, inner: Column<E>, outer: Column<T>) -> Statement<T, state::Joined> {
        self.chain(JoinKind::Inner, inner, outer, None)
    }

    /// Like [`Statement::join`] with an explicit table for `T`.
    pub fn join_table<T: Entity>(
        self,
        inner: Column<E>,
        outer: Column<T>,
        table: &str,
    ) -> Statement<T, state::Joined> {
        self.chain(JoinKind::Inner, inner, outer, Some(table))
    }

    /// Append ` LEFT JOIN <schema>.<T> AS <T> ON <E>.<inner> = <T>.<outer>`.
    pub fn left_join<T: Entity>(
        self,
        inner: Column<E>,
        outer: Column<T>,
    ) -> Statement<T, state::Joined> {
        self.chain(JoinKind::Left, inner, outer, None)
    }

    /// Like [`Statement::left_join`] with an explicit table for `T`.
    pub fn left_join_table<T: Entity>(
        self,
        inner: Column<E>,
        outer: Column<T>,
        table: &str,
    ) -> Statement<T, state::Joined> {
        self.chain(JoinKind::Left, inner, outer, Some(table))
    }

    fn chain<T: Entity>(
        mut self,
        kind: JoinKind,
        inner: Column<E>,
        outer: Column<T>,
        table: Option<&str>,
    ) -> Statement<T, state::Joined> {
        let left = self.resolved_name::<E>();
        let right = self.resolved_name::<T>();
        let table = match table {
            Some(table) => table.to_string(),
            None => table_ref(&self.config.schema, &right),
        };
        self.push(format_args!(
            " {} {table} AS {right} ON {left}.{inner} = {right}.{outer}",
            kind.keyword()
        ));
        sql_debug!(kind = kind.keyword(), table = %table, "join appended");
        self.retag_entity()
    }
}

impl<E, M> Statement<E, state::Searched<M>> {
    /// Append ` AND <T>.<column> = @<param>`.
    pub fn and_by<T: Entity>(
        self,
        column: Column<T>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare("AND", &qualified, param.name())
    }

    /// Append ` AND <T>.<column> LIKE @<param>` and wrap the bound value.
    pub fn and_like_by<T: Entity>(
        self,
        column: Column<T>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare_like("AND", &qualified, param.name())
    }

    /// Append ` AND <T>.<column> = '<value>'`.
    pub fn and_literal<T: Entity>(
        self,
        column: Column<T>,
        value: &str,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare_literal("AND", &qualified, value)
    }

    /// Append ` OR <T>.<column> = @<param>`.
    pub fn or_by<T: Entity>(
        self,
        column: Column<T>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare("OR", &qualified, param.name())
    }

    /// Append ` OR <T>.<column> LIKE @<param>` and wrap the bound value.
    pub fn or_like_by<T: Entity>(
        self,
        column: Column<T>,
        param: Column<M>,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare_like("OR", &qualified, param.name())
    }

    /// Append ` OR <T>.<column> = '<value>'`.
    pub fn or_literal<T: Entity>(
        self,
        column: Column<T>,
        value: &str,
    ) -> Statement<E, state::Searched<M>> {
        let qualified = self.qualify(column);
        self.compare_literal("OR", &qualified, value)
    }

    fn qualify<T: Entity>(&self, column: Column<T>) -> String {
        format!("{}.{}", self.resolved_name::<T>(), column.name())
    }
}

order_entry_methods!(<E, M> state::Searched<M>);
group_methods!(<E, M> state::Searched<M>);
