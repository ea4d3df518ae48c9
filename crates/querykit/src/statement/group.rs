use super::{Statement, state};
use crate::entity::IntoColumn;

order_entry_methods!(<E> state::Grouped);

impl<E> Statement<E, state::Grouped> {
    /// Append ` HAVING <column> = @<column>`.
    pub fn having(self, column: impl IntoColumn<E>) -> Statement<E, state::Having> {
        let column = column.column_name();
        self.compare("HAVING", column, column)
    }

    /// Append ` HAVING <column> LIKE @<column>` and wrap the bound value.
    pub fn having_like(self, column: impl IntoColumn<E>) -> Statement<E, state::Having> {
        let column = column.column_name();
        self.compare_like("HAVING", column, column)
    }

    /// Append ` HAVING COUNT(*) > @<param>`.
    pub fn having_count_bigger(self, param: impl IntoColumn<E>) -> Statement<E, state::Having> {
        self.having_count('>', param.column_name())
    }

    /// Append ` HAVING COUNT(*) < @<param>`.
    pub fn having_count_less(self, param: impl IntoColumn<E>) -> Statement<E, state::Having> {
        self.having_count('<', param.column_name())
    }

    /// Append ` HAVING <column> IN @<values_param>`.
    pub fn having_in(
        self,
        column: impl IntoColumn<E>,
        values_param: &str,
    ) -> Statement<E, state::Having> {
        self.membership("HAVING", column.column_name(), values_param, false)
    }

    /// Append ` HAVING <column> NOT IN @<values_param>`.
    pub fn having_not_in(
        self,
        column: impl IntoColumn<E>,
        values_param: &str,
    ) -> Statement<E, state::Having> {
        self.membership("HAVING", column.column_name(), values_param, true)
    }

    fn having_count(mut self, op: char, param: &str) -> Statement<E, state::Having> {
        self.push(format_args!(" HAVING COUNT(*) {op} @{param}"));
        self.retag()
    }
}
