use crate::bencode::{BencodeError, PathStep, Value, ValuePath, decode, to_display};

#[test]
fn parses_keys_and_indices() {
	let path = ValuePath::parse("info.files[1].path[0]").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Key("info".into()),
			PathStep::Key("files".into()),
			PathStep::Index(1),
			PathStep::Key("path".into()),
			PathStep::Index(0),
		]
	);
}

#[test]
fn keys_may_contain_spaces_and_punctuation() {
	let path = ValuePath::parse("info.piece length").expect("path parses");
	assert_eq!(path.steps, vec![PathStep::Key("info".into()), PathStep::Key("piece length".into())]);

	let path = ValuePath::parse("created-by").expect("path parses");
	assert_eq!(path.steps, vec![PathStep::Key("created-by".into())]);
}

#[test]
fn leading_index_selects_from_list_root() {
	let path = ValuePath::parse("[2]").expect("path parses");
	assert_eq!(path.steps, vec![PathStep::Index(2)]);
}

#[test]
fn rejects_malformed_paths() {
	for input in ["", "a..b", "a.", ".a", "a[", "a[x]", "a[1", "a]", "a.[0]"] {
		let err = ValuePath::parse(input).expect_err("invalid path");
		assert!(matches!(err, BencodeError::InvalidPath { .. }), "input {input:?}");
	}
}

#[test]
fn selects_nested_values() {
	let root = decode(b"d4:infod5:filesld6:lengthi7eed6:lengthi9eee12:piece lengthi16384eee").expect("decodes");
	let length = ValuePath::parse("info.files[1].length").expect("parses").select(&root).expect("selects");
	assert_eq!(length, &Value::Integer(9));

	let piece = ValuePath::parse("info.piece length").expect("parses").select(&root).expect("selects");
	assert_eq!(piece.as_integer(), Some(16384));
}

#[test]
fn selects_binary_keys_by_hex_form() {
	let root = decode(b"d1:\xffi1ee").expect("decodes");
	let value = ValuePath::parse("<hex>FF</hex>").expect("parses").select(&root).expect("selects");
	assert_eq!(value, &Value::Integer(1));
}

#[test]
fn reports_missing_step() {
	let root = decode(b"d4:listli1eee").expect("decodes");

	let err = ValuePath::parse("list[3]").expect("parses").select(&root).expect_err("out of range");
	match err {
		BencodeError::PathNotFound { path, step } => {
			assert_eq!(path, "list[3]");
			assert_eq!(step, "[3]");
		}
		other => panic!("unexpected error: {other}"),
	}

	let err = ValuePath::parse("list.inner").expect("parses").select(&root).expect_err("key on list");
	assert!(matches!(err, BencodeError::PathNotFound { step, .. } if step == "inner"));
}

#[test]
fn colliding_keys_select_the_value_shown_in_display() {
	let root = decode(b"d1:\xffi1e3:midi2e13:<hex>FF</hex>i3ee").expect("decodes");
	let selected = ValuePath::parse("<hex>FF</hex>").expect("parses").select(&root).expect("selects");
	assert_eq!(selected, &Value::Integer(3));
	assert_eq!(to_display(&root)["<hex>FF</hex>"], 3);
}
