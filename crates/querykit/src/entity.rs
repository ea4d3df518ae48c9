//! Entity metadata and typed column handles.
//!
//! An [`Entity`] exposes its simple type name and its declared field names.
//! `#[derive(Entity)]` generates both, plus one `COL_*` constant per field:
//!
//! ```ignore
//! use querykit::Entity;
//!
//! #[derive(Entity, serde::Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct User {
//!     id: i32,
//!     name: String,
//! }
//!
//! assert_eq!(User::NAME, "User");
//! assert_eq!(User::FIELDS, &["Id", "Name"]);
//! assert_eq!(User::COL_NAME.name(), "Name");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A plain data type whose fields name both table columns and parameters.
pub trait Entity {
    /// Simple type name (`User`), before reserved-word quoting.
    const NAME: &'static str;

    /// Declared field names in declaration order, as they appear in SQL and
    /// in the serialized parameter bag.
    const FIELDS: &'static [&'static str];

    /// Declared fields except one named `id` (case-insensitive).
    fn writable_fields() -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|field| !crate::ident::is_id_column(field))
            .collect()
    }
}

/// A column of entity `E`.
///
/// The entity parameter keeps columns of one table from being passed where a
/// column of another is expected.
pub struct Column<E: ?Sized> {
    name: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ?Sized> Column<E> {
    /// Create a column handle.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _entity: PhantomData,
        }
    }

    /// Column name as emitted into SQL.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: ?Sized> Clone for Column<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Column<E> {}

impl<E: ?Sized> PartialEq for Column<E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E: ?Sized> Eq for Column<E> {}

impl<E: ?Sized> fmt::Debug for Column<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

impl<E: ?Sized> fmt::Display for Column<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Anything usable as a column of entity `E`: a typed [`Column`] or a raw name.
pub trait IntoColumn<E: ?Sized> {
    /// Column name as emitted into SQL.
    fn column_name(&self) -> &str;
}

impl<E: ?Sized> IntoColumn<E> for Column<E> {
    fn column_name(&self) -> &str {
        self.name
    }
}

impl<E: ?Sized> IntoColumn<E> for &str {
    fn column_name(&self) -> &str {
        self
    }
}

impl<E: ?Sized> IntoColumn<E> for String {
    fn column_name(&self) -> &str {
        self.as_str()
    }
}
