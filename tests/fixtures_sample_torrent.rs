#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use bencview::bencode::{BencodeError, BencodeFile, DecodeOptions, RenderOptions, Value, ValueStats, preview_bytes, to_display};

#[test]
fn sample_torrent_decodes_in_strict_mode() {
	let file = BencodeFile::open(fixture_path("sample.torrent")).expect("fixture opens");
	let strict = DecodeOptions {
		strict_key_order: true,
		..DecodeOptions::default()
	};
	let root = file.decode(&strict).expect("sorted fixture decodes strictly");

	let info = root.get(b"info").expect("info dict");
	assert_eq!(info.get(b"piece length"), Some(&Value::Integer(16384)));
	assert_eq!(info.get(b"pieces").and_then(Value::as_bytes).map(<[u8]>::len), Some(8));
}

#[test]
fn sample_torrent_display_shows_pieces_as_hex() {
	let file = BencodeFile::open(fixture_path("sample.torrent")).expect("fixture opens");
	let root = file.decode(&DecodeOptions::default()).expect("decodes");
	let display = to_display(&root);

	assert_eq!(display["announce"], "http://tracker.example/announce");
	assert_eq!(display["creation date"], 1_700_000_000);
	assert_eq!(display["info"]["pieces"], "<hex>DE AD BE EF 00 01 FF 7F</hex>");
	assert_eq!(display["info"]["files"][0]["path"][1], "readme.txt");

	let keys: Vec<_> = display.as_object().expect("object").keys().cloned().collect();
	assert_eq!(keys, vec!["announce", "created by", "creation date", "info"]);
}

#[test]
fn sample_torrent_stats() {
	let file = BencodeFile::open(fixture_path("sample.torrent")).expect("fixture opens");
	let root = file.decode(&DecodeOptions::default()).expect("decodes");
	let stats = ValueStats::collect(&root);

	assert_eq!(stats.dicts, 4);
	assert_eq!(stats.lists, 3);
	assert_eq!(stats.integers, 4);
	assert_eq!(stats.max_depth, 5);
	assert_eq!(stats.hex_fallbacks, 1);
}

#[test]
fn preview_is_all_or_nothing() {
	let bytes = std::fs::read(fixture_path("truncated.torrent")).expect("fixture reads");
	let err = preview_bytes(&bytes, &DecodeOptions::default(), &RenderOptions::default()).expect_err("truncated input fails");
	assert!(matches!(err, BencodeError::UnexpectedEof { .. }));

	let bytes = std::fs::read(fixture_path("sample.torrent")).expect("fixture reads");
	let text = preview_bytes(&bytes, &DecodeOptions::default(), &RenderOptions::compact()).expect("preview renders");
	assert!(text.starts_with("{\"announce\":"));
	assert!(!text.contains('\n'));
}

#[test]
fn empty_document_is_malformed() {
	let file = BencodeFile::open(fixture_path("empty.torrent")).expect("fixture opens");
	assert!(file.is_empty());
	let err = file.decode(&DecodeOptions::default()).expect_err("empty input fails");
	assert!(matches!(err, BencodeError::UnexpectedEof { at: 0, .. }));
}

#[test]
fn missing_file_is_io_error() {
	let err = BencodeFile::open(fixture_path("does-not-exist.torrent")).err().expect("open fails");
	assert!(matches!(err, BencodeError::Io(_)));
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
