//! Named parameter bag projected from a model.
//!
//! A model is serialized with `serde` into a map of `field -> value`. Keys are
//! the placeholder names used in the SQL text (`@Name`). Clauses may rewrite
//! entries (LIKE wildcarding), and the bag can be written back onto the
//! model's own shape before execution.
//!
//! ```ignore
//! use querykit::Params;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Search { name: String }
//!
//! let mut params = Params::from_model(&Search { name: "bob".into() })?;
//! params.set("limit", 20);
//! let search: Search = params.to_model()?;
//! # Ok::<(), querykit::QueryError>(())
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::WildcardPolicy;
use crate::error::{QueryError, QueryResult};

/// Parameter bag bound to one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    /// Keys the model itself declares, in serialization order.
    declared: Vec<String>,
    /// Current values, including entries added with [`Params::set`].
    values: Map<String, Value>,
}

impl Params {
    /// Create an empty bag with no declared shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a model's fields into a bag.
    ///
    /// The model must serialize to a map (a struct with named fields or a map
    /// type); scalars, sequences and unit values are rejected.
    pub fn from_model<M: Serialize + ?Sized>(model: &M) -> QueryResult<Self> {
        match serde_json::to_value(model)? {
            Value::Object(values) => Ok(Self {
                declared: values.keys().cloned().collect(),
                values,
            }),
            other => Err(QueryError::InvalidModel {
                type_name: std::any::type_name::<M>(),
                kind: value_kind(&other),
            }),
        }
    }

    /// Look up a parameter value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Insert or replace a parameter, returning the previous value.
    ///
    /// Names the model does not declare (e.g. paging `Offset`/`limit`) are kept
    /// for binding but dropped by [`Params::to_object`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names the model declares.
    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    /// All parameters as a JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume the bag, returning all parameters.
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    /// Wrap a parameter in `%...%` for a LIKE comparison.
    ///
    /// Returns `false` when the parameter is missing or when `policy` is
    /// [`WildcardPolicy::Once`] and the value is already wrapped.
    pub fn wrap_like(&mut self, name: &str, policy: WildcardPolicy) -> bool {
        let Some(value) = self.values.get_mut(name) else {
            return false;
        };
        let operand = like_operand(value);
        if policy == WildcardPolicy::Once && is_wrapped(&operand) {
            return false;
        }
        *value = Value::String(format!("%{operand}%"));
        true
    }

    /// Write the current values back onto the model's declared shape.
    ///
    /// Entries the model does not declare are skipped.
    pub fn to_object(&self) -> Value {
        let object: Map<String, Value> = self
            .declared
            .iter()
            .filter_map(|name| {
                self.values
                    .get(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect();
        Value::Object(object)
    }

    /// Reconstitute a typed model from the current values.
    pub fn to_model<M: DeserializeOwned>(&self) -> QueryResult<M> {
        Ok(serde_json::from_value(self.to_object())?)
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Text a value contributes to a LIKE pattern.
fn like_operand(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_wrapped(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('%') && s.ends_with('%')
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Search {
        mock_id: i32,
        other_mock_name: Option<String>,
    }

    fn search() -> Search {
        Search {
            mock_id: 1,
            other_mock_name: Some("someName".into()),
        }
    }

    #[test]
    fn projects_named_fields() {
        let params = Params::from_model(&search()).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("MockId"), Some(&json!(1)));
        assert_eq!(params.get("OtherMockName"), Some(&json!("someName")));
        let mut declared: Vec<_> = params.declared().collect();
        declared.sort_unstable();
        assert_eq!(declared, vec!["MockId", "OtherMockName"]);
    }

    #[test]
    fn rejects_non_map_models() {
        let err = Params::from_model(&42).unwrap_err();
        assert!(err.is_invalid_model());
        assert!(err.to_string().contains("number"));

        let err = Params::from_model(&vec![1, 2]).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn wrap_like_mutates_in_place() {
        let mut params = Params::from_model(&search()).unwrap();
        assert!(params.wrap_like("OtherMockName", WildcardPolicy::Compound));
        assert_eq!(params.get("OtherMockName"), Some(&json!("%someName%")));
    }

    #[test]
    fn wrap_like_stringifies_non_strings() {
        let mut params = Params::from_model(&Search {
            mock_id: 7,
            other_mock_name: None,
        })
        .unwrap();
        params.wrap_like("MockId", WildcardPolicy::Compound);
        params.wrap_like("OtherMockName", WildcardPolicy::Compound);
        assert_eq!(params.get("MockId"), Some(&json!("%7%")));
        assert_eq!(params.get("OtherMockName"), Some(&json!("%%")));
    }

    #[test]
    fn wrap_like_compounds_by_default() {
        let mut params = Params::from_model(&search()).unwrap();
        params.wrap_like("OtherMockName", WildcardPolicy::Compound);
        params.wrap_like("OtherMockName", WildcardPolicy::Compound);
        assert_eq!(params.get("OtherMockName"), Some(&json!("%%someName%%")));
    }

    #[test]
    fn wrap_like_once_policy_skips_wrapped_values() {
        let mut params = Params::from_model(&search()).unwrap();
        assert!(params.wrap_like("OtherMockName", WildcardPolicy::Once));
        assert!(!params.wrap_like("OtherMockName", WildcardPolicy::Once));
        assert_eq!(params.get("OtherMockName"), Some(&json!("%someName%")));
    }

    #[test]
    fn wrap_like_missing_key_is_noop() {
        let mut params = Params::from_model(&search()).unwrap();
        assert!(!params.wrap_like("Nope", WildcardPolicy::Compound));
        assert!(!params.contains("Nope"));
    }

    #[test]
    fn to_object_skips_undeclared_entries() {
        let mut params = Params::from_model(&search()).unwrap();
        params.set("Offset", 10);
        params.set("limit", 5);
        assert_eq!(params.len(), 4);

        let object = params.to_object();
        assert_eq!(object, json!({"MockId": 1, "OtherMockName": "someName"}));
    }

    #[test]
    fn to_model_reflects_mutations() {
        let mut params = Params::from_model(&search()).unwrap();
        params.wrap_like("OtherMockName", WildcardPolicy::Compound);
        let model: Search = params.to_model().unwrap();
        assert_eq!(
            model,
            Search {
                mock_id: 1,
                other_mock_name: Some("%someName%".into()),
            }
        );
    }
}
