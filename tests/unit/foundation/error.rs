use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(DeskError::decode("x").to_string().contains("decode error:"));
    assert!(
        DeskError::allocation("x")
            .to_string()
            .contains("allocation error:")
    );
    assert!(
        DeskError::capacity("x")
            .to_string()
            .contains("capacity error:")
    );
    assert!(
        DeskError::settings("x")
            .to_string()
            .contains("settings error:")
    );
    assert!(
        DeskError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(DeskError::host("x").to_string().contains("host error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeskError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
