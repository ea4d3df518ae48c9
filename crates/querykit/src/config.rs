//! Builder configuration.
//!
//! The defaults emit SQL-Server flavored text: `dbo`-qualified tables, `@name`
//! placeholders and `OFFSET ... FETCH NEXT ... ROWS ONLY` paging.

use serde::Deserialize;

/// Default schema prefixed to resolved table names.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Default paging clause appended by `page()`.
pub const DEFAULT_PAGING_CLAUSE: &str = "OFFSET (@Offset) ROWS FETCH NEXT (@limit) ROWS ONLY";

/// How LIKE clauses treat a parameter that is already wrapped in `%...%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardPolicy {
    /// Wrap on every LIKE call, so a second call on the same name yields `%%v%%`.
    #[default]
    Compound,
    /// Skip wrapping when the value already starts and ends with `%`.
    Once,
}

/// Configuration shared by every statement created from a [`crate::QueryBuilder`].
///
/// Can be embedded in a host application's own (serde) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Schema prefixed to resolved entity names (`dbo.User`).
    pub schema: String,
    /// Entity names containing any of these substrings are bracket-quoted.
    pub reserved_names: Vec<String>,
    /// Exclude a column named `id` (case-insensitive) from UPDATE SET lists.
    pub exclude_id_column: bool,
    /// Emit `DELETE * FROM` instead of `DELETE FROM`.
    pub legacy_delete_star: bool,
    /// Clause appended by `page()`.
    pub paging_clause: String,
    /// LIKE wrapping behavior on repeated calls.
    pub wildcard_policy: WildcardPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            reserved_names: vec!["User".to_string()],
            exclude_id_column: true,
            legacy_delete_star: false,
            paging_clause: DEFAULT_PAGING_CLAUSE.to_string(),
            wildcard_policy: WildcardPolicy::Compound,
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with SQL-Server defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema used for default table references.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Replace the reserved-name substrings that trigger bracket quoting.
    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Keep or drop the `id` column in UPDATE SET lists.
    pub fn with_exclude_id_column(mut self, exclude: bool) -> Self {
        self.exclude_id_column = exclude;
        self
    }

    /// Emit the legacy `DELETE * FROM` head.
    pub fn with_legacy_delete_star(mut self, enabled: bool) -> Self {
        self.legacy_delete_star = enabled;
        self
    }

    /// Override the paging clause (e.g. `LIMIT @limit OFFSET @Offset`).
    pub fn with_paging_clause(mut self, clause: impl Into<String>) -> Self {
        self.paging_clause = clause.into();
        self
    }

    /// Set the LIKE wrapping policy.
    pub fn with_wildcard_policy(mut self, policy: WildcardPolicy) -> Self {
        self.wildcard_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sql_server_flavored() {
        let config = BuilderConfig::default();
        assert_eq!(config.schema, "dbo");
        assert_eq!(config.reserved_names, vec!["User".to_string()]);
        assert!(config.exclude_id_column);
        assert!(!config.legacy_delete_star);
        assert_eq!(config.paging_clause, DEFAULT_PAGING_CLAUSE);
        assert_eq!(config.wildcard_policy, WildcardPolicy::Compound);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: BuilderConfig =
            serde_json::from_str(r#"{"schema": "app", "wildcard_policy": "once"}"#).unwrap();
        assert_eq!(config.schema, "app");
        assert_eq!(config.wildcard_policy, WildcardPolicy::Once);
        assert!(config.exclude_id_column);
    }
}
