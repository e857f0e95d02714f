use super::*;

#[test]
fn manifest_json_has_stable_field_names() {
    let m = FrameManifest {
        source: "spin.gif".to_owned(),
        screen: Canvas::new(16, 8).unwrap(),
        frames: vec![ManifestEntry {
            file: "spin_frame_0002.png".to_owned(),
            frame_index: 1,
            delay_cs: 7,
        }],
    };
    let json = m.to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["source"], "spin.gif");
    assert_eq!(v["screen"]["width"], 16);
    assert_eq!(v["frames"][0]["file"], "spin_frame_0002.png");
    assert_eq!(v["frames"][0]["frame_index"], 1);
    assert_eq!(v["frames"][0]["delay_cs"], 7);

    let back: FrameManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn manifest_file_name_appends_suffix() {
    assert_eq!(manifest_file_name("spin"), "spin_frames.json");
}
