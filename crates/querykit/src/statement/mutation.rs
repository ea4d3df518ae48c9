use super::{Statement, state};
use crate::entity::{Column, IntoColumn};

// INSERT takes no further clauses.

where_entry_methods!(state::Update);
where_by_methods!(state::Update);

where_entry_methods!(state::Delete);
where_by_methods!(state::Delete);
