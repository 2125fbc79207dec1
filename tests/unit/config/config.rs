use super::*;

use crate::foundation::core::{Rgb8, Threshold};
use crate::scene::layout::Sizing;

#[test]
fn empty_object_is_interactive_preset_and_canonical_layouts() {
    let cfg = PapercutConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.stylize, StylizeParams::default());
    assert_eq!(cfg.layout_table().unwrap(), LayoutTable::canonical());
    assert!(cfg.assets_dir.is_none());
}

#[test]
fn partial_stylize_section_keeps_other_defaults() {
    let cfg = PapercutConfig::from_json_str(
        r##"{"stylize": {"contrast": 10.0, "threshold": 200, "color": "#980015"}}"##,
    )
    .unwrap();
    assert_eq!(cfg.stylize.contrast, 10.0);
    assert_eq!(cfg.stylize.threshold, Threshold::from(200));
    assert_eq!(cfg.stylize.color, Rgb8::new(152, 0, 21));
    assert_eq!(cfg.stylize.opacity.get(), 1.0);
}

#[test]
fn scene_override_is_merged() {
    let cfg = PapercutConfig::from_json_str(
        r##"{
            "scenes": {
                "wall": {
                    "scene": "wall",
                    "sizing": {"kind": "fixed", "width": 1339, "height": 1339},
                    "anchor": {"kind": "fraction", "x": 0.5, "y": 0.5},
                    "color": [197, 73, 60],
                    "opacity": 0.9
                }
            },
            "assets_dir": "assets"
        }"##,
    )
    .unwrap();
    let table = cfg.layout_table().unwrap();
    assert_eq!(
        table.get(SceneKind::Wall).sizing,
        Sizing::Fixed {
            width: 1339,
            height: 1339
        }
    );
    assert_eq!(
        *table.get(SceneKind::Window),
        SceneLayout::canonical(SceneKind::Window)
    );
    assert_eq!(cfg.assets_dir, Some(PathBuf::from("assets")));
}

#[test]
fn syntax_and_schema_errors_are_config_errors() {
    for bad in ["{", r#"{"unknown": 1}"#, r#"{"stylize": {"threshold": 300}}"#] {
        let err = PapercutConfig::from_json_str(bad).unwrap_err();
        assert!(matches!(err, PapercutError::Config(_)), "{bad}: {err}");
    }
}

#[test]
fn mismatched_scene_key_is_invalid_parameter() {
    let err = PapercutConfig::from_json_str(
        r##"{"scenes": {"door": {
            "scene": "wall",
            "sizing": {"kind": "height_fraction", "fraction": 0.2},
            "anchor": {"kind": "absolute", "x": 0, "y": 0},
            "color": "#000000",
            "opacity": 1.0
        }}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, PapercutError::InvalidParameter(_)));
}

#[test]
fn from_path_reads_file() {
    let dir = std::env::temp_dir().join(format!("papercut_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("papercut.json");
    std::fs::write(&path, r#"{"stylize": {"opacity": 0.5}}"#).unwrap();
    let cfg = PapercutConfig::from_path(&path).unwrap();
    assert_eq!(cfg.stylize.opacity.get(), 0.5);

    let missing = PapercutConfig::from_path(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(missing, PapercutError::ResourceMissing(_)));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn out_of_range_scene_geometry_fails_validation() {
    let err = PapercutConfig::from_json_str(
        r##"{"scenes": {"wall": {
            "scene": "wall",
            "sizing": {"kind": "height_fraction", "fraction": 0.4948},
            "anchor": {"kind": "fraction", "x": 1e300, "y": 0.5},
            "color": "#980015",
            "opacity": 0.9
        }}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, PapercutError::InvalidParameter(_)));

    let err = PapercutConfig::from_json_str(
        r##"{"scenes": {"wall": {
            "scene": "wall",
            "sizing": {"kind": "fixed", "width": 100000, "height": 100000},
            "anchor": {"kind": "absolute", "x": 0, "y": 0},
            "color": "#980015",
            "opacity": 0.9
        }}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, PapercutError::InvalidParameter(_)));
}
