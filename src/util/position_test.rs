use super::*;

// =============================================================
// ButtonTimerPosition
// =============================================================

#[test]
fn from_code_maps_known_corners() {
    assert_eq!(ButtonTimerPosition::from_code(1), ButtonTimerPosition::TopLeft);
    assert_eq!(ButtonTimerPosition::from_code(2), ButtonTimerPosition::TopRight);
    assert_eq!(ButtonTimerPosition::from_code(3), ButtonTimerPosition::BottomLeft);
    assert_eq!(ButtonTimerPosition::from_code(4), ButtonTimerPosition::BottomRight);
}

#[test]
fn from_code_defaults_unknown_to_bottom_right() {
    for code in [0, 5, -1, 42] {
        assert_eq!(ButtonTimerPosition::from_code(code), ButtonTimerPosition::BottomRight);
    }
}

#[test]
fn code_inverts_from_code() {
    for code in 1..=4_u8 {
        assert_eq!(ButtonTimerPosition::from_code(i64::from(code)).code(), code);
    }
}

#[test]
fn deserialize_accepts_numbers_and_numeric_strings() {
    let parsed: Vec<ButtonTimerPosition> = serde_json::from_str(r#"[1, "2", 3.0, " 4 "]"#).unwrap();
    assert_eq!(
        parsed,
        [
            ButtonTimerPosition::TopLeft,
            ButtonTimerPosition::TopRight,
            ButtonTimerPosition::BottomLeft,
            ButtonTimerPosition::BottomRight
        ]
    );
}

#[test]
fn deserialize_degrades_junk_to_default() {
    let parsed: Vec<ButtonTimerPosition> = serde_json::from_str(r#"[null, true, "left", 2.5, 9]"#).unwrap();
    assert!(parsed.iter().all(|p| *p == ButtonTimerPosition::BottomRight));
}

#[test]
fn serialize_writes_numeric_code() {
    let json = serde_json::to_string(&ButtonTimerPosition::TopRight).unwrap();
    assert_eq!(json, "2");
}

// =============================================================
// resolve_alignment
// =============================================================

#[test]
fn bottom_left_aligns_end_then_start() {
    let alignment = resolve_alignment(ButtonTimerPosition::from_code(3));
    assert_eq!(alignment, Alignment { justify_content: "flex-end", align_items: "flex-start" });
}

#[test]
fn each_corner_resolves_distinct_alignment() {
    let all = [
        resolve_alignment(ButtonTimerPosition::TopLeft),
        resolve_alignment(ButtonTimerPosition::TopRight),
        resolve_alignment(ButtonTimerPosition::BottomLeft),
        resolve_alignment(ButtonTimerPosition::BottomRight),
    ];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
    assert_eq!(all[0], Alignment { justify_content: "flex-start", align_items: "flex-start" });
    assert_eq!(all[3], Alignment { justify_content: "flex-end", align_items: "flex-end" });
}

#[test]
fn alignment_serializes_camel_case_and_styles() {
    let alignment = resolve_alignment(ButtonTimerPosition::TopRight);
    let json = serde_json::to_value(alignment).unwrap();
    assert_eq!(json, serde_json::json!({"justifyContent": "flex-start", "alignItems": "flex-end"}));
    assert_eq!(alignment.style(), "justify-content: flex-start; align-items: flex-end;");
}
