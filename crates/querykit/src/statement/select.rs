use super::{Statement, state};
use crate::entity::{Column, IntoColumn};
use crate::error::{QueryError, QueryResult};

where_entry_methods!(state::Select);
where_by_methods!(state::Select);
order_entry_methods!(<E> state::Select);
group_methods!(<E> state::Select);

where_entry_methods!(state::Distinct);
where_by_methods!(state::Distinct);
order_entry_methods!(<E> state::Distinct);

impl<E> Statement<E, state::Distinct> {
    /// Append ` GROUP BY <column>`.
    ///
    /// The column must already occur in the query text (normally through the
    /// DISTINCT list); otherwise the statement is rejected.
    pub fn group_by(self, column: impl IntoColumn<E>) -> QueryResult<Statement<E, state::Grouped>> {
        self.group_by_all([column.column_name()])
    }

    /// Append ` GROUP BY <c1>, <c2>, ...`, checking each column like
    /// [`Statement::group_by`].
    pub fn group_by_all<I, C>(self, columns: I) -> QueryResult<Statement<E, state::Grouped>>
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn<E>,
    {
        let columns: Vec<String> = super::column_list::<E, _, _>(columns);
        if let Some(missing) = columns.iter().find(|c| !self.sql.contains(c.as_str())) {
            sql_debug!(column = %missing, sql = %self.sql, "GROUP BY column not selected");
            return Err(QueryError::missing_select_column(missing));
        }
        self.group(columns)
    }
}
