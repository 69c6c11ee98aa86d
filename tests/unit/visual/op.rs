use super::*;

#[test]
fn kinds_round_trip_through_method_names() {
    for kind in OpKind::ALL {
        assert_eq!(kind.name().parse::<OpKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_method_name_is_rejected() {
    let err = "set_glow".parse::<OpKind>().unwrap_err();
    assert!(matches!(err, ExprError::UnknownAttribute(name) if name == "set_glow"));
}

#[test]
fn bind_checks_argument_kind() {
    assert_eq!(
        OpKind::Scale.bind(Value::Number(1.5)).unwrap(),
        Op::Scale(1.5)
    );
    assert_eq!(
        OpKind::Stroke.bind(Color::RED.into()).unwrap(),
        Op::Stroke(Stroke::color(Color::RED))
    );
    let err = OpKind::Scale.bind(Color::RED.into()).unwrap_err();
    assert!(matches!(
        err,
        ExprError::ArgumentMismatch { ref attribute, .. } if attribute == "scale"
    ));
}

#[test]
fn bound_op_reports_its_kind() {
    let p = Placement::new(Rect::ZERO, Direction::Left);
    assert_eq!(OpKind::AlignTo.bind(p.into()).unwrap().kind(), OpKind::AlignTo);
    assert_eq!(p.buff, DEFAULT_BUFF);
}
