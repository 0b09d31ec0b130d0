use crate::bencode::{Value, ValueStats, decode, top_level_keys};

#[test]
fn scalar_root_has_zero_depth() {
	let stats = ValueStats::collect(&Value::Integer(5));
	assert_eq!(
		stats,
		ValueStats {
			integers: 1,
			..ValueStats::default()
		}
	);
}

#[test]
fn counts_nodes_depth_and_hex_fallbacks() {
	let root = decode(b"d4:name3:cat4:tagsl1:a2:\xff\xfeli1eee1:\x80i2ee").expect("decodes");
	let stats = ValueStats::collect(&root);

	assert_eq!(stats.integers, 2);
	assert_eq!(stats.byte_strings, 3);
	assert_eq!(stats.lists, 2);
	assert_eq!(stats.dicts, 1);
	assert_eq!(stats.dict_entries, 3);
	assert_eq!(stats.max_depth, 3);
	// keys: name(4) tags(4) \x80(1); values: cat(3) a(1) \xff\xfe(2)
	assert_eq!(stats.payload_bytes, 15);
	assert_eq!(stats.hex_fallbacks, 2);
}

#[test]
fn top_level_keys_follow_input_order() {
	let root = decode(b"d1:zi1e1:\xffi2e1:ai3ee").expect("decodes");
	assert_eq!(top_level_keys(&root), vec!["z", "<hex>FF</hex>", "a"]);
	assert!(top_level_keys(&Value::List(Vec::new())).is_empty());
}
