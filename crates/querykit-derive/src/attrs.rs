//! Attribute parsing for the Entity derive macro.
//!
//! Column names must match the keys `serde` produces when the entity is bound
//! as a model, so the relevant `#[serde(...)]` attributes are read alongside
//! the crate's own `#[orm(...)]`.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, DeriveInput, Field, LitStr, Result};

/// `#[serde(rename_all = "...")]` rules.
#[derive(Clone, Copy)]
pub(super) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule `{other}`"),
                ));
            }
        })
    }

    /// Rename a snake_case field the way serde does: word boundaries are the
    /// existing `_`, nothing else is re-split.
    pub fn apply(self, field: &str) -> String {
        match self {
            Self::Lower | Self::Snake => field.to_string(),
            Self::Upper | Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Pascal => pascal_case(field),
            Self::Camel => {
                let pascal = pascal_case(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            Self::Kebab => field.replace('_', "-"),
            Self::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

fn pascal_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = true;
    for c in field.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Struct-level settings.
pub(super) struct ContainerAttrs {
    /// Entity name override from `#[orm(name = "...")]`.
    pub name: Option<String>,
    pub rename_all: Option<RenameRule>,
}

/// Field-level settings.
#[derive(Default)]
pub(super) struct FieldAttrs {
    pub rename: Option<String>,
    /// `skip`, `skip_serializing` or `flatten`: not a column of this entity.
    pub excluded: bool,
}

pub(super) fn container_attrs(input: &DeriveInput) -> Result<ContainerAttrs> {
    let mut out = ContainerAttrs {
        name: None,
        rename_all: None,
    };

    for attr in &input.attrs {
        if attr.path().is_ident("orm") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported orm attribute, expected `name = \"...\"`"))
                }
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    if let Some(lit) = serialize_name(&meta)? {
                        out.rename_all = Some(RenameRule::parse(&lit)?);
                    }
                    Ok(())
                } else {
                    skip_meta(&meta)
                }
            })?;
        }
    }

    Ok(out)
}

pub(super) fn field_attrs(field: &Field) -> Result<FieldAttrs> {
    let mut out = FieldAttrs::default();

    for attr in field.attrs.iter().filter(|a| is_serde(a)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(lit) = serialize_name(&meta)? {
                    out.rename = Some(lit.value());
                }
                Ok(())
            } else if meta.path.is_ident("skip")
                || meta.path.is_ident("skip_serializing")
                || meta.path.is_ident("flatten")
            {
                out.excluded = true;
                Ok(())
            } else {
                skip_meta(&meta)
            }
        })?;
    }

    Ok(out)
}

/// Serialized name of a field.
pub(super) fn column_name(field: &Field, attrs: &FieldAttrs, rule: Option<RenameRule>) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    let ident = field
        .ident
        .as_ref()
        .map(|i| i.unraw().to_string())
        .unwrap_or_default();
    match rule {
        Some(rule) => rule.apply(&ident),
        None => ident,
    }
}

fn is_serde(attr: &Attribute) -> bool {
    attr.path().is_ident("serde")
}

/// Read `key = "..."` or the `serialize` half of `key(serialize = "...", deserialize = "...")`.
fn serialize_name(meta: &ParseNestedMeta) -> Result<Option<LitStr>> {
    if meta.input.peek(syn::Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    let mut found = None;
    meta.parse_nested_meta(|inner| {
        let lit: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("serialize") {
            found = Some(lit);
        }
        Ok(())
    })?;
    Ok(found)
}

/// Consume a serde attribute this macro does not care about.
fn skip_meta(meta: &ParseNestedMeta) -> Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let _group: proc_macro2::Group = meta.input.parse()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_rules_follow_serde_names() {
        let field = "other_mock_name";
        assert_eq!(RenameRule::Pascal.apply(field), "OtherMockName");
        assert_eq!(RenameRule::Camel.apply(field), "otherMockName");
        assert_eq!(RenameRule::Upper.apply(field), "OTHER_MOCK_NAME");
        assert_eq!(RenameRule::ScreamingKebab.apply(field), "OTHER-MOCK-NAME");
        assert_eq!(RenameRule::Kebab.apply(field), "other-mock-name");
        assert_eq!(RenameRule::Snake.apply(field), "other_mock_name");
    }

    #[test]
    fn rename_rules_keep_existing_capitals() {
        assert_eq!(RenameRule::Pascal.apply("userID"), "UserID");
        assert_eq!(RenameRule::Camel.apply("userID"), "userID");
        assert_eq!(RenameRule::Camel.apply("UserID"), "userID");
        assert_eq!(RenameRule::Snake.apply("userID"), "userID");
        assert_eq!(RenameRule::Lower.apply("userID"), "userID");
        assert_eq!(RenameRule::ScreamingSnake.apply("user_iD"), "USER_ID");
        assert_eq!(RenameRule::Kebab.apply("api_URL"), "api-URL");
        assert_eq!(RenameRule::Pascal.apply("html_2_pdf"), "Html2Pdf");
    }

    #[test]
    fn reads_container_and_field_attrs() {
        let input: DeriveInput = syn::parse_quote! {
            #[orm(name = "Person")]
            #[serde(rename_all = "PascalCase", deny_unknown_fields)]
            struct Human {
                #[serde(rename = "ID")]
                id: i32,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                nick_name: Option<String>,
                #[serde(skip)]
                cache: u8,
                #[serde(flatten)]
                extra: Extra,
            }
        };
        let container = container_attrs(&input).unwrap();
        assert_eq!(container.name.as_deref(), Some("Person"));
        let rule = container.rename_all;

        let syn::Data::Struct(data) = &input.data else {
            unreachable!()
        };
        let columns: Vec<String> = data
            .fields
            .iter()
            .filter_map(|f| {
                let attrs = field_attrs(f).unwrap();
                (!attrs.excluded).then(|| column_name(f, &attrs, rule))
            })
            .collect();
        assert_eq!(columns, vec!["ID", "NickName"]);
    }

    #[test]
    fn rename_with_serialize_half() {
        let input: DeriveInput = syn::parse_quote! {
            struct Wrapper {
                #[serde(rename(serialize = "Out", deserialize = "in"))]
                value: i32,
            }
        };
        let syn::Data::Struct(data) = &input.data else {
            unreachable!()
        };
        let field = data.fields.iter().next().unwrap();
        let attrs = field_attrs(field).unwrap();
        assert_eq!(attrs.rename.as_deref(), Some("Out"));
    }

    #[test]
    fn unknown_rename_rule_is_an_error() {
        let input: DeriveInput = syn::parse_quote! {
            #[serde(rename_all = "Title Case")]
            struct Bad { a: i32 }
        };
        assert!(container_attrs(&input).is_err());
    }
}
