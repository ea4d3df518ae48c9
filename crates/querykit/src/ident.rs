//! SQL identifier and literal helpers.
//!
//! Entity names map to table references as `<schema>.<name>`; a name that
//! contains a reserved substring is bracket-quoted:
//!
//! ```ignore
//! use querykit::ident::{resolve_entity_name, table_ref};
//!
//! let reserved = vec!["User".to_string()];
//! assert_eq!(resolve_entity_name("TestUser", &reserved), "[TestUser]");
//! assert_eq!(table_ref("dbo", "Order"), "dbo.Order");
//! ```

use std::borrow::Cow;

/// Resolve an entity's simple type name to the name used in SQL.
///
/// Pure function of `name` and the reserved list: names containing any reserved
/// substring are wrapped in `[...]`, everything else passes through.
pub fn resolve_entity_name<'a>(name: &'a str, reserved: &[String]) -> Cow<'a, str> {
    if reserved
        .iter()
        .any(|word| !word.is_empty() && name.contains(word.as_str()))
    {
        Cow::Owned(format!("[{name}]"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Build a schema-qualified table reference.
pub fn table_ref(schema: &str, resolved_name: &str) -> String {
    if schema.is_empty() {
        resolved_name.to_string()
    } else {
        format!("{schema}.{resolved_name}")
    }
}

/// Whether a column is the conventional primary key (`id`, any casing).
pub fn is_id_column(column: &str) -> bool {
    column.eq_ignore_ascii_case("id")
}

/// Render a string as a single-quoted SQL literal.
///
/// Embedded `'` are doubled. This is NOT an injection defense for arbitrary
/// input; literals belong to caller-controlled constants only.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
