use super::*;

#[test]
fn artifact_names() {
    assert_eq!(cutout_file_name(1_700_000_000), "papercut_1700000000.png");
    assert_eq!(scene_file_name(SceneKind::Door, 42), "door_42.png");
    assert_eq!(raw_file_name("a dragon", 7), "flux_a_dragon_7.png");
}

#[test]
fn slug_truncates_then_filters() {
    assert_eq!(prompt_slug("  dragon & phoenix!  "), "dragon__phoenix");
    assert_eq!(
        prompt_slug("a very long prompt about lanterns"),
        "a_very_long_prompt_a"
    );
    assert_eq!(prompt_slug("lotus-flower_01"), "lotus-flower_01");
    assert_eq!(prompt_slug("!!!"), "");
    // Punctuation inside the first 20 characters still counts toward the limit.
    assert_eq!(prompt_slug("dragon & phoenix rises"), "dragon__phoenix_ris");
}

#[test]
fn timestamp_is_after_2020() {
    assert!(unix_timestamp() > 1_577_836_800);
}
