#![allow(dead_code)]

use std::collections::BTreeMap;

use querykit::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Entity, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Search {
    customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    region: Option<String>,
}

#[derive(Serialize)]
struct Extra {
    tag: String,
}

#[derive(Serialize, Entity)]
struct WithFlatten {
    id: i32,
    #[serde(flatten)]
    extra: Extra,
}

#[test]
fn camel_case_columns_match_bag_keys() {
    assert_eq!(Search::FIELDS, &["customerName", "region"]);

    let search = Search {
        customer_name: "acme".into(),
        region: Some("eu".into()),
    };
    let stmt = select::<Search>()
        .set_model(&search)
        .unwrap()
        .where_like(Search::COL_CUSTOMER_NAME)
        .and(Search::COL_REGION);
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM dbo.Search WHERE customerName LIKE @customerName AND region = @region"
    );
    let search: Search = stmt.model_as().unwrap().unwrap();
    assert_eq!(search.customer_name, "%acme%");
}

#[test]
fn omitted_field_is_absent_and_like_is_noop() {
    let search = Search {
        customer_name: "acme".into(),
        region: None,
    };
    let stmt = select::<Search>()
        .set_model(&search)
        .unwrap()
        .where_like(Search::COL_REGION);
    let params = stmt.params().unwrap();
    assert!(!params.contains("region"));
    assert_eq!(params.len(), 1);
}

#[test]
fn flattened_fields_are_not_columns() {
    assert_eq!(WithFlatten::FIELDS, &["id"]);
    assert_eq!(
        insert::<WithFlatten>().sql(),
        "INSERT INTO dbo.WithFlatten() VALUES()"
    );

    let stmt = update::<WithFlatten>()
        .set_model(&WithFlatten {
            id: 1,
            extra: Extra { tag: "t".into() },
        })
        .unwrap();
    assert_eq!(stmt.params().unwrap().get("tag"), Some(&json!("t")));
}

#[test]
fn map_models_bind_directly() {
    let mut filter = BTreeMap::new();
    filter.insert("customerName", "globex");
    let stmt = delete::<Search>()
        .set_model(&filter)
        .unwrap()
        .where_like(Search::COL_CUSTOMER_NAME);
    assert_eq!(stmt.model(), Some(json!({"customerName": "%globex%"})));
}

#[test]
fn non_map_models_are_rejected() {
    let err = select::<Search>().set_model("just a string").unwrap_err();
    assert!(err.is_invalid_model());

    let err = select::<Search>().set_model(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, QueryError::InvalidModel { kind: "array", .. }));
}

#[test]
fn into_parts_hands_over_sql_and_bag() {
    let search = Search {
        customer_name: "x".into(),
        region: Some("us".into()),
    };
    let (sql, params) = update::<Search>()
        .set_model(&search)
        .unwrap()
        .r#where(Search::COL_REGION)
        .into_parts();
    assert_eq!(
        sql,
        "UPDATE dbo.Search SET customerName = @customerName, region = @region WHERE region = @region"
    );
    let params = params.unwrap();
    let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
    assert!(names.contains(&"customerName"));
    assert!(names.contains(&"region"));
}
