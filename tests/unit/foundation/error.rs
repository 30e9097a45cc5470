use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProbeError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        ProbeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ProbeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(ProbeError::decode("x").to_string().contains("decode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProbeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ProbeError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, ProbeError::Serde(_)));
}
