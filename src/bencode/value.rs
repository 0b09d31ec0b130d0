/// Decoded bencode value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Signed integer (`i...e`).
	Integer(i64),
	/// Length-prefixed raw byte string.
	Bytes(Vec<u8>),
	/// Ordered list (`l...e`).
	List(Vec<Value>),
	/// Dictionary entries in input order (`d...e`).
	Dict(Vec<(Vec<u8>, Value)>),
}

impl Value {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Integer(_) => "integer",
			Self::Bytes(_) => "bytes",
			Self::List(_) => "list",
			Self::Dict(_) => "dict",
		}
	}

	/// Integer payload, if this is an integer.
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Raw bytes, if this is a byte string.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// Elements, if this is a list.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Entries, if this is a dictionary.
	pub fn as_dict(&self) -> Option<&[(Vec<u8>, Value)]> {
		match self {
			Self::Dict(entries) => Some(entries),
			_ => None,
		}
	}

	/// Look up a dictionary entry by raw key.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		self.as_dict()?.iter().find(|(k, _)| k.as_slice() == key).map(|(_, v)| v)
	}
}
