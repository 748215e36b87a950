//! Strategy reply parsing tests.

use adcraft::creative::{CreativeStrategyResult, UglyAdStructure};
use adcraft::providers::extract_json;

#[test]
fn null_structure_reads_as_empty() {
    let result: CreativeStrategyResult =
        extract_json(r#"{"uglyAdStructure":null,"cta":"Shop Now"}"#).expect("should parse");
    assert_eq!(result.ugly_ad_structure, UglyAdStructure::default());
    assert_eq!(result.cta, "Shop Now");
}

#[test]
fn null_fields_read_as_empty_strings() {
    let result: CreativeStrategyResult = extract_json(
        r#"{"visualScene":null,"headline":"Sleep again",
            "uglyAdStructure":{"keyword":null,"outcome":"rest"}}"#,
    )
    .expect("should parse");
    assert!(result.visual_scene.is_empty());
    assert_eq!(result.headline, "Sleep again");
    assert!(result.ugly_ad_structure.keyword.is_empty());
    assert_eq!(result.ugly_ad_structure.outcome, "rest");
}

#[test]
fn wrong_types_are_still_rejected() {
    assert!(extract_json::<CreativeStrategyResult>(r#"{"cta":42}"#).is_err());
}
