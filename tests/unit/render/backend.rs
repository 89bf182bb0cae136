use super::*;

fn frame(data: Vec<u8>, width: u32, height: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: true,
    }
}

#[test]
fn pixel_lookup_is_row_major() {
    let f = frame((0u8..16).collect(), 2, 2);
    assert_eq!(f.pixel(0, 0), Some([0, 1, 2, 3]));
    assert_eq!(f.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(f.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let f = frame(vec![64, 0, 128, 128, 10, 20, 30, 255, 0, 0, 0, 0], 3, 1);
    let straight = f.to_straight_rgba8();
    assert_eq!(&straight[0..4], &[128, 0, 255, 128]);
    assert_eq!(&straight[4..8], &[10, 20, 30, 255]);
    assert_eq!(&straight[8..12], &[0, 0, 0, 0]);
}

#[test]
fn blank_detection() {
    assert!(frame(vec![0; 16], 2, 2).is_blank());
    assert!(!frame(vec![0, 0, 0, 1], 1, 1).is_blank());
}
