use super::*;

fn text_element(id: &str) -> Element {
    Element {
        id: id.to_string(),
        kind: ElementKind::Text,
        name: String::new(),
        x: 100.0,
        y: 200.0,
        width: 400.0,
        height: 120.0,
        rotation: 0.0,
        z_index: 0,
        src_or_text: "Daily specials".to_string(),
        images: vec![],
        props: ElementProps::default(),
        start_frame: 10,
        duration_frames: 5,
    }
}

#[test]
fn visibility_window_boundaries() {
    let el = text_element("t0");
    assert!(!el.is_visible_at(FrameIndex(9)));
    assert!(el.is_visible_at(FrameIndex(10)));
    assert!(el.is_visible_at(FrameIndex(14)));
    assert!(!el.is_visible_at(FrameIndex(15)));
}

#[test]
fn local_frame_is_offset_from_start() {
    let el = text_element("t0");
    assert_eq!(el.local_frame(FrameIndex(10)), FrameIndex(0));
    assert_eq!(el.local_frame(FrameIndex(14)), FrameIndex(4));
}

#[test]
fn parses_store_shape_camel_case() {
    let json = r#"{
        "id": "el-1",
        "type": "slideshow",
        "name": "Burger carousel",
        "x": 40, "y": 80, "width": 1000, "height": 600,
        "rotation": 15, "zIndex": 3,
        "srcOrText": "",
        "images": ["a.jpg", "b.jpg"],
        "properties": { "borderRadius": 16, "slideshowDuration": 180 },
        "startFrame": 0, "durationFrames": 600
    }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    assert_eq!(el.kind, ElementKind::Slideshow);
    assert_eq!(el.z_index, 3);
    assert_eq!(el.images.len(), 2);
    assert_eq!(el.props.border_radius, Some(16.0));
    assert_eq!(el.props.slideshow_duration, Some(180));
    assert_eq!(el.duration_frames, 600);
    el.validate().unwrap();
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"{ "id": "el-2", "type": "image", "srcOrText": "menu.png" }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    assert_eq!(el.name, "");
    assert_eq!(el.x, 0.0);
    assert_eq!(el.props, ElementProps::default());
    // Defaulted zero duration marks the element malformed.
    assert_eq!(el.duration_frames, 0);
    assert!(el.validate().is_err());
}

#[test]
fn element_round_trips_through_json() {
    let mut el = text_element("t0");
    el.props.fill_color = Some("#ff8800".to_string());
    el.props.text_align = Some(TextAlign::Left);
    let json = serde_json::to_string(&el).unwrap();
    let back: Element = serde_json::from_str(&json).unwrap();
    assert_eq!(el, back);
}

#[test]
fn validate_rejects_bad_elements() {
    let mut el = text_element("t0");
    el.duration_frames = 0;
    assert!(el.validate().is_err());

    let mut el = text_element("t1");
    el.x = f64::NAN;
    assert!(el.validate().is_err());

    let mut el = text_element("t2");
    el.width = -1.0;
    assert!(el.validate().is_err());

    let mut el = text_element("");
    el.id = "  ".to_string();
    assert!(el.validate().is_err());

    let mut el = text_element("t3");
    el.props.font_size = Some(0.0);
    assert!(el.validate().is_err());

    let mut el = text_element("t4");
    el.props.slideshow_duration = Some(0);
    assert!(el.validate().is_err());
}

#[test]
fn validate_caps_slideshow_images() {
    let mut el = text_element("s0");
    el.kind = ElementKind::Slideshow;
    el.images = (0..MAX_SLIDESHOW_IMAGES).map(|i| format!("{i}.jpg")).collect();
    el.validate().unwrap();

    el.images.push("one-too-many.jpg".to_string());
    assert!(el.validate().is_err());
}

#[test]
fn snapshot_validate_rejects_duplicate_ids() {
    let snapshot = Snapshot {
        project_id: Some("p1".to_string()),
        elements: vec![text_element("dup"), text_element("dup")],
    };
    let err = snapshot.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn snapshot_from_json_defaults_and_serde_error() {
    let snap = Snapshot::from_json(r#"{ "elements": [] }"#).unwrap();
    assert_eq!(snap.project_id, None);
    assert!(snap.elements.is_empty());
    snap.validate().unwrap();

    assert!(matches!(
        Snapshot::from_json("not json"),
        Err(MenucastError::Serde(_))
    ));
}
