use stockroom_core::{Category, NewCategory};

#[test]
fn category_serializes_with_snake_case_fields() {
    let category = Category {
        id: 7,
        code: "FRT".to_string(),
        name: "Fruit".to_string(),
    };

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["code"], "FRT");
    assert_eq!(json["name"], "Fruit");
}

#[test]
fn new_category_deserializes_with_missing_fields_as_none() {
    let draft: NewCategory = serde_json::from_str(r#"{"name": "Fruit"}"#).unwrap();
    assert_eq!(draft.code, None);
    assert_eq!(draft.name.as_deref(), Some("Fruit"));
}

#[test]
fn category_roundtrips_through_json() {
    let category = Category {
        id: 1,
        code: "VEG".to_string(),
        name: "Vegetables".to_string(),
    };

    let json = serde_json::to_string(&category).unwrap();
    let decoded: Category = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, category);
}
