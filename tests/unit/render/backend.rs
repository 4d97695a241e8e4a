use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 32, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame();
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(1, 0), Some([64, 32, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let straight = frame().to_straight_rgba8();
    assert_eq!(&straight[..4], &[255, 0, 0, 255]);
    assert_eq!(&straight[4..], &[128, 64, 0, 128]);

    let raw = FrameRGBA {
        premultiplied: false,
        ..frame()
    };
    assert_eq!(raw.to_straight_rgba8(), raw.data);
}

#[test]
fn png_round_trips_dimensions() {
    let dir = std::env::temp_dir().join(format!("promoreel-png-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("still.png");
    frame().save_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
}
