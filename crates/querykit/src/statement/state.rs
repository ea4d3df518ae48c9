//! Phantom types for statement positions.
//!
//! Each marker names one position in the SQL grammar. A [`super::Statement`]
//! tagged with a marker only exposes the clauses that may legally follow it,
//! so calling `having` before `group_by` is a compile error.

use std::marker::PhantomData;

/// `SELECT * FROM ...` (also the root of a `select_from` call).
#[derive(Debug, Clone, Copy)]
pub struct Select;

/// `SELECT DISTINCT c1, c2 FROM ...`; `GROUP BY` is validated against the list.
#[derive(Debug, Clone, Copy)]
pub struct Distinct;

/// `SELECT ... FROM a AS A JOIN b AS B ON ...`
#[derive(Debug, Clone, Copy)]
pub struct Joined;

/// After `WHERE`, `AND` or `OR`.
#[derive(Debug, Clone, Copy)]
pub struct Filtered;

/// After a table-qualified `WHERE` on a joined statement, searching with
/// fields of model `M`.
pub struct Searched<M>(PhantomData<fn() -> M>);

/// After `GROUP BY`.
#[derive(Debug, Clone, Copy)]
pub struct Grouped;

/// After a `HAVING` clause.
#[derive(Debug, Clone, Copy)]
pub struct Having;

/// After an ascending `ORDER BY` item.
#[derive(Debug, Clone, Copy)]
pub struct Ordered;

/// After a descending `ORDER BY` item; paging is only reachable from here.
#[derive(Debug, Clone, Copy)]
pub struct OrderedDesc;

/// After the paging clause. Terminal.
#[derive(Debug, Clone, Copy)]
pub struct Paged;

/// `INSERT INTO ... VALUES(...)`. Terminal.
#[derive(Debug, Clone, Copy)]
pub struct Insert;

/// `UPDATE ... SET ...`
#[derive(Debug, Clone, Copy)]
pub struct Update;

/// `DELETE FROM ...`
#[derive(Debug, Clone, Copy)]
pub struct Delete;
