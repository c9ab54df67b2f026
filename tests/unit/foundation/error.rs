use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        UiError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(UiError::asset("x").to_string().contains("asset error:"));
    assert!(UiError::font("x").to_string().contains("font error:"));
    assert!(
        UiError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = UiError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
