use std::path::Path;

use subshift::{Direction, Document, Offset, SrtError, Timestamp};

const SOURCE: &str = "1\r\n\
00:00:01,000 --> 00:00:04,074\r\n\
Hello world.\r\n\
\r\n\
2\r\n\
00:00:10,250 --> 00:00:12,900\r\n\
<i>Two lines</i>\r\n\
of text\r\n\
\r\n\
junk that belongs to no cue\r\n\
\r\n\
3\r\n\
23:59:59,900 --> 24:00:01,000\r\n\
Late.\r\n\
\r\n";

#[test]
fn load_shift_save_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie.srt");
    std::fs::write(&path, SOURCE).unwrap();

    let mut document = Document::load(&path).unwrap();
    assert_eq!(document.len(), 3);
    document.shift_by(Offset::new(0, 0, 2, 500, Direction::Add));
    document.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "1\r\n00:00:03,500 --> 00:00:06,574\r\nHello world.\r\n\r\n\
         2\r\n00:00:12,750 --> 00:00:15,400\r\n<i>Two lines</i>\r\nof text\r\n\r\n\
         3\r\n24:00:02,400 --> 24:00:03,500\r\nLate.\r\n\r\n"
    );
}

#[test]
fn subtract_then_add_restores_times() {
    let original = Document::parse(SOURCE);
    let mut document = original.clone();
    let offset = Offset::new(0, 0, 0, 750, Direction::Subtract);
    document.shift_by(offset);
    document.shift_by(Offset {
        direction: Direction::Add,
        ..offset
    });
    assert_eq!(document, original);
}

#[test]
fn large_subtract_clamps_every_timestamp() {
    let mut document = Document::parse(SOURCE);
    document.shift_by(Offset::new(48, 0, 0, 0, Direction::Subtract));
    assert!(document
        .iter()
        .all(|e| e.start() == Timestamp::ZERO && e.end() == Timestamp::ZERO));
    assert!(document.render().contains("00:00:00,0 --> 00:00:00,0\r\n"));
}

#[test]
fn reparsing_rendered_output_is_stable() {
    let rendered = Document::parse(SOURCE).render();
    let reparsed = Document::parse(&rendered);
    assert_eq!(reparsed, Document::parse(SOURCE));
    assert_eq!(reparsed.render(), rendered);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = Document::load(Path::new("no/such/file.srt")).unwrap_err();
    assert!(matches!(err, SrtError::Io { .. }));
}
