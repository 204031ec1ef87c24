mod common;

use common::{SAMPLE_COLLECTION, TempCollection};
use guide_search::loader::load_categories;
use guide_search::search::{FindOutcome, SearchIndex};

fn build_index(min_token_length: usize) -> SearchIndex {
    let collection = TempCollection::new();
    let path = collection.write_commands_json(SAMPLE_COLLECTION);
    let categories = load_categories(&path).expect("load sample collection");
    SearchIndex::with_min_token_length(&categories, min_token_length)
}

fn match_names(outcome: FindOutcome<'_>) -> Vec<String> {
    outcome
        .into_matches()
        .iter()
        .map(|m| m.guide.name.clone())
        .collect()
}

#[test]
fn test_find_by_guide_name_prefix() {
    let index = build_index(1);
    assert_eq!(match_names(index.find("jugger")), vec!["Juggernaut Opening"]);
}

#[test]
fn test_find_by_fam_across_categories() {
    let index = build_index(1);
    assert_eq!(
        match_names(index.find("ironclad")),
        vec!["Juggernaut Opening", "Catacombs Speedrun"]
    );
}

#[test]
fn test_find_intersects_category_and_guide_terms() {
    // "ironclad" matches two guides; adding the category webname narrows
    // it to the pvp one.
    let index = build_index(1);
    assert_eq!(
        match_names(index.find("ironclad pvp")),
        vec!["Juggernaut Opening"]
    );
}

#[test]
fn test_find_by_attachment_and_nested_field_text() {
    let index = build_index(1);
    assert_eq!(
        match_names(index.find("catacombs map")),
        vec!["Catacombs Speedrun"]
    );
    // "cleanse" lives in a nested schemaless field.
    assert_eq!(
        match_names(index.find("cleanse")),
        vec!["Catacombs Speedrun"]
    );
}

#[test]
fn test_find_by_obsolete_note() {
    let index = build_index(1);
    assert_eq!(match_names(index.find("nerfed")), vec!["Glass Cannon Rush"]);
}

#[test]
fn test_missing_term_short_circuits() {
    let index = build_index(1);
    assert_eq!(
        index.find("ironclad zzzz"),
        FindOutcome::Matches(vec![]),
        "one unknown term must empty the whole query"
    );
}

#[test]
fn test_too_short_is_distinct_from_no_match() {
    let index = build_index(3);
    assert_eq!(index.find("jg"), FindOutcome::TooShort);
    assert_eq!(index.find("zzzz"), FindOutcome::Matches(vec![]));
}

#[test]
fn test_index_stats_reflect_collection() {
    let index = build_index(1);
    assert_eq!(index.guide_count(), 3);
    assert!(index.prefix_count() > 0);
}

#[test]
fn test_category_back_reference() {
    let index = build_index(1);
    let matches = index.find("catacombs").into_matches();
    assert_eq!(matches.len(), 1);
    // No webname, so the display name is derived from the raw name.
    assert_eq!(matches[0].category_name, "dungeons");
}

#[test]
fn test_empty_collection_builds_empty_index() {
    let collection = TempCollection::new();
    let path = collection.write_commands_json("[]");
    let categories = load_categories(&path).expect("empty collection is valid");
    let index = SearchIndex::new(&categories);
    assert_eq!(index.guide_count(), 0);
    assert_eq!(index.find("anything"), FindOutcome::Matches(vec![]));
}
