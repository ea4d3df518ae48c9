use super::{Statement, state};
use crate::entity::IntoColumn;

impl<E> Statement<E, state::Ordered> {
    /// Append `, <column>`.
    pub fn order_by(self, column: impl IntoColumn<E>) -> Statement<E, state::Ordered> {
        self.order(", ", column.column_name(), false)
    }

    /// Append `, <column> DESC`.
    pub fn order_by_desc(self, column: impl IntoColumn<E>) -> Statement<E, state::OrderedDesc> {
        self.order(", ", column.column_name(), true)
    }
}

impl<E> Statement<E, state::OrderedDesc> {
    /// Append `, <column>`.
    pub fn order_by(self, column: impl IntoColumn<E>) -> Statement<E, state::Ordered> {
        self.order(", ", column.column_name(), false)
    }

    /// Append `, <column> DESC`.
    pub fn order_by_desc(self, column: impl IntoColumn<E>) -> Statement<E, state::OrderedDesc> {
        self.order(", ", column.column_name(), true)
    }

    /// Append the configured paging clause.
    ///
    /// Its placeholders (`@Offset`, `@limit` by default) are not filled in;
    /// add them with [`crate::Params::set`] through [`Statement::params_mut`].
    pub fn page(mut self) -> Statement<E, state::Paged> {
        let clause = self.config.paging_clause.clone();
        self.push(format_args!(" {clause}"));
        self.retag()
    }
}
