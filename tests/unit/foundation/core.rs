use super::*;

#[test]
fn viewport_rejects_empty_dimensions() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    let v = Viewport::new(1280, 720).unwrap();
    assert_eq!(v.center_x(), 640.0);
    assert_eq!(v.bounds(), Rect::new(0.0, 0.0, 1280.0, 720.0));
}

#[test]
fn hex_colours_parse_with_and_without_alpha() {
    assert_eq!(
        Rgba8::from_hex("#3c99dc").unwrap(),
        Rgba8::opaque(0x3c, 0x99, 0xdc)
    );
    assert_eq!(
        Rgba8::from_hex("#ff007f80").unwrap(),
        Rgba8::opaque(0xff, 0x00, 0x7f).with_alpha(0x80)
    );
    assert!(Rgba8::from_hex("3c99dc").is_err());
    assert!(Rgba8::from_hex("#3c99d").is_err());
    assert!(Rgba8::from_hex("#zz99dc").is_err());
}

#[test]
fn colour_display_is_lowercase_hex() {
    assert_eq!(Rgba8::opaque(0x00, 0xff, 0xcc).to_string(), "#00ffcc");
    assert_eq!(Rgba8::opaque(1, 2, 3).with_alpha(4).to_string(), "#01020304");
}

#[test]
fn default_palette_is_the_dashboard_palette() {
    let hex: Vec<String> = Palette::DEFAULT
        .colors()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(hex, ["#1c1c3c", "#3c99dc", "#ff007f", "#00ffcc"]);
}

#[test]
fn palette_serializes_as_hex_array() {
    let json = serde_json::to_string(&Palette::DEFAULT).unwrap();
    assert_eq!(json, r##"["#1c1c3c","#3c99dc","#ff007f","#00ffcc"]"##);
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Palette::DEFAULT);
}

struct Fixed(usize);

impl ColorSource for Fixed {
    fn next_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

#[test]
fn pick_uses_the_source_index() {
    assert_eq!(Palette::DEFAULT.pick(&mut Fixed(2)), Palette::DEFAULT.0[2]);
    // Out-of-range indices from a misbehaving source clamp to the last entry.
    assert_eq!(Palette::DEFAULT.pick(&mut Fixed(9)), Palette::DEFAULT.0[3]);
}
