//! Creative format catalog tests.

use std::collections::HashSet;

use adcraft::creative::{is_storyboard_label, CreativeFormat, FormatGroup};

#[test]
fn catalog_has_forty_unique_labels_and_ids() {
    let labels: HashSet<_> = CreativeFormat::ALL.iter().map(|f| f.label()).collect();
    let ids: HashSet<_> = CreativeFormat::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(CreativeFormat::ALL.len(), 40);
    assert_eq!(labels.len(), 40);
    assert_eq!(ids.len(), 40);
}

#[test]
fn every_format_parses_from_label_and_id() {
    for format in CreativeFormat::ALL {
        assert_eq!(format.label().parse::<CreativeFormat>(), Ok(format));
        assert_eq!(format.id().parse::<CreativeFormat>(), Ok(format));
    }
}

#[test]
fn label_parsing_ignores_case_and_whitespace() {
    assert_eq!(
        "  twitter repost ".parse::<CreativeFormat>(),
        Ok(CreativeFormat::TwitterRepost)
    );
    assert_eq!(
        "VIDEO: UGC HOOK".parse::<CreativeFormat>(),
        Ok(CreativeFormat::VideoUgcHook)
    );
}

#[test]
fn unknown_format_is_an_error() {
    let err = "Hologram".parse::<CreativeFormat>().expect_err("should fail");
    assert!(err.to_string().contains("Hologram"));
}

#[test]
fn groups_partition_the_catalog() {
    let total: usize = FormatGroup::ALL.iter().map(|g| g.formats().len()).sum();
    assert_eq!(total, CreativeFormat::ALL.len());
    for group in FormatGroup::ALL {
        assert!(!group.label().is_empty());
        assert!(group.formats().iter().all(|f| f.group() == group));
    }
}

#[test]
fn storyboard_routing_follows_label_keywords() {
    let storyboard: Vec<_> = CreativeFormat::ALL
        .into_iter()
        .filter(|f| f.is_storyboard())
        .collect();
    assert_eq!(
        storyboard,
        vec![
            CreativeFormat::VideoUgcHook,
            CreativeFormat::VideoProblemSolution,
            CreativeFormat::VideoUnboxingAsmr,
            CreativeFormat::VslSceneCut,
        ]
    );
    assert!(is_storyboard_label("Custom Hook Reel"));
    assert!(is_storyboard_label("VSL Intro"));
    assert!(!is_storyboard_label("Reels Thumbnail"));
}

#[test]
fn long_form_formats_are_text_led() {
    for format in CreativeFormat::ALL.into_iter().filter(|f| f.is_long_form()) {
        assert!(format.is_text_led(), "{format} should be text-led");
    }
    assert!(!CreativeFormat::BeforeAfter.is_text_led());
}

#[test]
fn display_uses_label() {
    assert_eq!(CreativeFormat::GmailUx.to_string(), "Gmail UX");
    assert_eq!(CreativeFormat::BeforeAfter.to_string(), "Before & After");
}
