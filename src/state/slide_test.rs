use super::*;

fn make_boxes(n: usize) -> Vec<BonusBox> {
    (0..n)
        .map(|i| BonusBox { button_text: format!("Claim {i}"), ..BonusBox::default() })
        .collect()
}

// =============================================================
// BonusBox serde
// =============================================================

#[test]
fn bonus_box_parses_full_editor_payload() {
    let json = r#"{
        "backgroundImageUrl": "slides/bg.png",
        "mobileBackgroundImageUrl": "slides/bg-m.png",
        "objectImageUrl": "slides/chest.png",
        "buttonText": "Claim",
        "enableButton": true,
        "expireAt": "2026-12-31T23:59:59.000Z",
        "buttonAndTimerPosition": 2,
        "reward": [{"type": "freespins", "amount": 50}]
    }"#;
    let bonus_box: BonusBox = serde_json::from_str(json).unwrap();
    assert_eq!(bonus_box.background_image_url, "slides/bg.png");
    assert_eq!(bonus_box.mobile_background_image_url.as_deref(), Some("slides/bg-m.png"));
    assert_eq!(bonus_box.object_image_url.as_deref(), Some("slides/chest.png"));
    assert!(bonus_box.enable_button);
    assert_eq!(bonus_box.expire_at.as_deref(), Some("2026-12-31T23:59:59.000Z"));
    assert_eq!(bonus_box.button_and_timer_position, ButtonTimerPosition::TopRight);
    assert_eq!(bonus_box.reward.len(), 1);
    assert_eq!(bonus_box.reward[0].kind, "freespins");
}

#[test]
fn bonus_box_defaults_missing_fields() {
    let bonus_box: BonusBox = serde_json::from_str("{}").unwrap();
    assert_eq!(bonus_box, BonusBox::default());
    assert_eq!(bonus_box.button_and_timer_position, ButtonTimerPosition::BottomRight);
    assert!(!bonus_box.enable_button);
}

#[test]
fn bonus_box_tolerates_bad_position() {
    let bonus_box: BonusBox = serde_json::from_str(r#"{"buttonAndTimerPosition": "nowhere"}"#).unwrap();
    assert_eq!(bonus_box.button_and_timer_position, ButtonTimerPosition::BottomRight);
}

#[test]
fn bonus_box_treats_null_fields_as_defaults() {
    let json = r#"{
        "backgroundImageUrl": null,
        "mobileBackgroundImageUrl": null,
        "buttonText": null,
        "enableButton": null,
        "expireAt": null,
        "buttonAndTimerPosition": null,
        "reward": null
    }"#;
    let bonus_box: BonusBox = serde_json::from_str(json).unwrap();
    assert_eq!(bonus_box, BonusBox::default());
}

#[test]
fn bonus_box_coerces_mistyped_fields() {
    let json = r#"{"buttonText": 50, "enableButton": "true", "objectImageUrl": false}"#;
    let bonus_box: BonusBox = serde_json::from_str(json).unwrap();
    assert_eq!(bonus_box.button_text, "50");
    assert!(bonus_box.enable_button);
    assert_eq!(bonus_box.object_image_url, None);
}

// =============================================================
// Reward
// =============================================================

#[test]
fn reward_accepts_string_amount() {
    let reward: Reward = serde_json::from_str(r#"{"type": "coins", "amount": "10"}"#).unwrap();
    assert_eq!(reward.amount, 10.0);
    assert_eq!(reward.display_text(), "10 coins");
}

#[test]
fn reward_unreadable_amount_is_zero() {
    let reward: Reward = serde_json::from_str(r#"{"type": "coins", "amount": "lots", "label": null}"#).unwrap();
    assert_eq!(reward.amount, 0.0);
    assert_eq!(reward.label, None);
}

#[test]
fn reward_display_prefers_label() {
    let reward = Reward { kind: "cash".into(), amount: 10.0, label: Some("Ten bucks".into()) };
    assert_eq!(reward.display_text(), "Ten bucks");
}

#[test]
fn reward_display_formats_amount_and_kind() {
    let whole = Reward { kind: "freespins".into(), amount: 50.0, label: None };
    assert_eq!(whole.display_text(), "50 freespins");

    let fractional = Reward { kind: "BTC".into(), amount: 0.25, label: Some("  ".into()) };
    assert_eq!(fractional.display_text(), "0.25 BTC");

    let bare = Reward { kind: String::new(), amount: 3.0, label: None };
    assert_eq!(bare.display_text(), "3");
}

// =============================================================
// SlideDraft
// =============================================================

#[test]
fn from_json_reads_title_and_boxes() {
    let draft = SlideDraft::from_json(r#"{"title": "Weekend", "boxes": [{}, {"buttonText": "Go"}]}"#).unwrap();
    assert_eq!(draft.title, "Weekend");
    assert_eq!(draft.boxes.len(), 2);
    assert_eq!(draft.boxes[1].button_text, "Go");
}

#[test]
fn from_json_accepts_null_title_and_boxes() {
    let draft = SlideDraft::from_json(r#"{"title": null, "boxes": null}"#).unwrap();
    assert_eq!(draft, SlideDraft::default());
}

#[test]
fn from_json_keeps_half_filled_box_positions() {
    let json = r#"{
        "title": "t",
        "boxes": [
            {"backgroundImageUrl": null, "buttonText": null, "enableButton": null},
            null,
            {"buttonText": "Go", "reward": [{"type": "cash", "amount": "5"}, null]}
        ]
    }"#;
    let draft = SlideDraft::from_json(json).unwrap();
    assert_eq!(draft.boxes.len(), 3);
    assert_eq!(draft.boxes[0], BonusBox::default());
    assert_eq!(draft.boxes[1], BonusBox::default());
    assert_eq!(draft.boxes[2].button_text, "Go");
    assert_eq!(draft.boxes[2].reward.len(), 2);
    assert_eq!(draft.boxes[2].reward[0].display_text(), "5 cash");
}

#[test]
fn from_json_rejects_malformed_payload() {
    let err = SlideDraft::from_json("{\"title\": ").unwrap_err();
    assert!(matches!(err, PreviewError::InvalidJson(_)));
}

#[test]
fn load_reports_missing_file_path() {
    let path = Path::new("/definitely/not/here/slide.json");
    let err = SlideDraft::load(path).unwrap_err();
    assert!(matches!(err, PreviewError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here/slide.json"));
}

#[test]
fn visible_boxes_caps_at_four() {
    let draft = SlideDraft { title: String::new(), boxes: make_boxes(6) };
    assert_eq!(draft.visible_boxes().len(), MAX_BOXES);
    assert_eq!(draft.visible_boxes()[3].button_text, "Claim 3");
}

#[test]
fn box_count_clamps_to_one_through_four() {
    assert_eq!(box_count(&[]), 1);
    assert_eq!(box_count(&make_boxes(1)), 1);
    assert_eq!(box_count(&make_boxes(3)), 3);
    assert_eq!(box_count(&make_boxes(9)), 4);
}
