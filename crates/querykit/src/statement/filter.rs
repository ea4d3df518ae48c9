use super::{Statement, state};
use crate::entity::{Column, IntoColumn};
use crate::error::QueryResult;

filter_methods!(state::Filtered);
order_entry_methods!(<E> state::Filtered);
group_methods!(<E> state::Filtered);

filter_methods!(state::Having);
order_entry_methods!(<E> state::Having);
