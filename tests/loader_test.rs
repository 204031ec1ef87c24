mod common;

use common::{SAMPLE_COLLECTION, TempCollection};
use guide_search::error::LoadError;
use guide_search::loader::load_categories;

#[test]
fn test_load_sample_collection() {
    let collection = TempCollection::new();
    let path = collection.write_commands_json(SAMPLE_COLLECTION);

    let categories = load_categories(&path).expect("load sample collection");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].display_name(), "pvp");
    assert_eq!(categories[1].display_name(), "dungeons");
    assert_eq!(categories[0].guides.len(), 2);
    assert_eq!(categories[1].guides[0].attachments.len(), 2);
}

#[test]
fn test_missing_file_is_read_error() {
    let collection = TempCollection::new();
    let missing = collection.path().join("missing.json");

    let err = load_categories(&missing).expect_err("missing file must fail");
    assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
}

#[test]
fn test_invalid_json_is_parse_error() {
    let collection = TempCollection::new();
    let path = collection.write_commands_json("{not json");

    let err = load_categories(&path).expect_err("malformed file must fail");
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let collection = TempCollection::new();
    // Valid JSON, but not a category list.
    let path = collection.write_commands_json(r#"{"name": "not a list"}"#);

    let err = load_categories(&path).expect_err("wrong shape must fail");
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn test_error_messages_name_the_path() {
    let collection = TempCollection::new();
    let path = collection.write_commands_json("[");

    let err = load_categories(&path).expect_err("truncated file must fail");
    assert!(err.to_string().contains("commands.json"));
}
