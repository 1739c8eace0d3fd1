use super::*;
use crate::foundation::core::Rgba8;
use crate::scene::tree::Props;

fn cfg() -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 4,
            height: 4,
        },
        fps: Fps::new(30, 1).unwrap(),
        range: FrameRange::new(FrameIndex(0), FrameIndex(2)).unwrap(),
    }
}

fn node(x: f64) -> VisualNode {
    VisualNode::rect(Props::at(x, 0.0), Rgba8::WHITE)
}

#[test]
fn in_memory_sink_keeps_frames_and_resets_on_begin() {
    let mut s = InMemorySink::new();
    s.begin(cfg()).unwrap();
    s.push_frame(FrameIndex(0), &node(1.0)).unwrap();
    s.push_frame(FrameIndex(1), &node(2.0)).unwrap();
    s.end().unwrap();
    assert!(s.is_finished());
    assert_eq!(s.frames().len(), 2);
    assert_eq!(s.config(), Some(cfg()));

    s.begin(cfg()).unwrap();
    assert!(s.frames().is_empty());
    assert!(!s.is_finished());
}

#[test]
fn json_lines_sink_writes_one_object_per_line() {
    let mut s = JsonLinesSink::new(Vec::new());
    s.begin(cfg()).unwrap();
    s.push_frame(FrameIndex(0), &node(1.0)).unwrap();
    s.push_frame(FrameIndex(1), &node(2.0)).unwrap();
    s.end().unwrap();
    assert_eq!(s.frames_written(), 2);

    let text = String::from_utf8(s.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(text.ends_with('\n'));

    let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(v["frame"], 1);
    assert_eq!(v["tree"]["kind"], "rect");
    assert_eq!(v["tree"]["x"], 2.0);
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_lines_sink_surfaces_write_errors() {
    let mut s = JsonLinesSink::new(FailingWriter);
    s.begin(cfg()).unwrap();
    assert!(s.push_frame(FrameIndex(0), &node(0.0)).is_err());
}
