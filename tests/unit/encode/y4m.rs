use super::*;
use crate::foundation::core::Fps;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("promoreel-y4m-{}", std::process::id()))
        .join(name)
}

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn header_names_size_rate_and_sampling() {
    let cfg = SinkConfig {
        width: 1080,
        height: 1920,
        fps: Fps::STANDARD,
    };
    assert_eq!(y4m_header(&cfg), "YUV4MPEG2 W1080 H1920 F30:1 Ip A1:1 C444\n");
}

#[test]
fn bt601_reference_colors() {
    assert_eq!(rgb_to_ycbcr(0, 0, 0), [16, 128, 128]);
    assert_eq!(rgb_to_ycbcr(255, 255, 255), [235, 128, 128]);
    assert_eq!(rgb_to_ycbcr(255, 0, 0), [82, 90, 240]);
}

#[test]
fn writes_header_then_planar_frames() {
    let path = scratch_path("two.y4m");
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::STANDARD,
    };
    let mut sink = Y4mSink::new(&path);
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &solid(2, 2, [0, 0, 0, 255])).unwrap();
    sink.push_frame(FrameIndex(1), &solid(2, 2, [255, 255, 255, 255])).unwrap();
    sink.end().unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = y4m_header(&cfg);
    assert!(bytes.starts_with(header.as_bytes()));

    let body = &bytes[header.len()..];
    let frame_len = b"FRAME\n".len() + 2 * 2 * 3;
    assert_eq!(body.len(), 2 * frame_len);
    assert_eq!(&body[..6], b"FRAME\n");
    assert_eq!(&body[6..10], &[16; 4]);
    assert_eq!(&body[10..18], &[128; 8]);
    assert_eq!(&body[frame_len + 6..frame_len + 10], &[235; 4]);
}

#[test]
fn abort_removes_partial_file() {
    let path = scratch_path("partial.y4m");
    let mut sink = Y4mSink::new(&path);
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::STANDARD,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(2, 2, [9, 9, 9, 255])).unwrap();
    sink.abort();
    assert!(!path.exists());
    assert!(sink.push_frame(FrameIndex(1), &solid(2, 2, [9, 9, 9, 255])).is_err());
}

#[test]
fn rejects_out_of_order_frames() {
    let path = scratch_path("order.y4m");
    let mut sink = Y4mSink::new(&path);
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::STANDARD,
    })
    .unwrap();
    sink.push_frame(FrameIndex(5), &solid(2, 2, [0, 0, 0, 255])).unwrap();
    assert!(sink.push_frame(FrameIndex(4), &solid(2, 2, [0, 0, 0, 255])).is_err());
    sink.abort();
}
