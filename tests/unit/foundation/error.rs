use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VoiceprintsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VoiceprintsError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        VoiceprintsError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        VoiceprintsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VoiceprintsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
