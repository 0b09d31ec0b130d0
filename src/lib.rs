//! Public library API for previewing bencode documents as JSON.

/// Bencode decoding, text-or-hex presentation, and JSON rendering.
pub mod bencode;
