use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ExprError::shape_mismatch(3, 2)
            .to_string()
            .contains("shape mismatch:")
    );
    assert!(
        ExprError::unknown_part("x")
            .to_string()
            .contains("unknown part: 'x'")
    );
    assert!(
        ExprError::unknown_attribute("set_glow")
            .to_string()
            .contains("unknown attribute: 'set_glow'")
    );
    assert!(
        ExprError::argument_mismatch("scale", "a number")
            .to_string()
            .contains("argument mismatch:")
    );
    assert!(
        ExprError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn index_error_names_index_and_len() {
    let msg = ExprError::index_out_of_range(7, 6).to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains("len 6"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ExprError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
