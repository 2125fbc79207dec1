use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PapercutError::decode("a.png", "bad header")
            .to_string()
            .contains("decode error: a.png")
    );
    assert!(
        PapercutError::missing("bg/Base_door.jpg")
            .to_string()
            .contains("missing resource:")
    );
    assert!(
        PapercutError::invalid("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        PapercutError::write("out.png", "disk full")
            .to_string()
            .contains("write error: out.png")
    );
    assert!(
        PapercutError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        PapercutError::generation("x")
            .to_string()
            .contains("generation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PapercutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn missing_keeps_the_path() {
    let err = PapercutError::missing("assets/Base_wall.jpeg");
    match err {
        PapercutError::ResourceMissing(p) => assert!(p.ends_with("Base_wall.jpeg")),
        other => panic!("unexpected variant: {other:?}"),
    }
}
