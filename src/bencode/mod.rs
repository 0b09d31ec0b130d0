mod bytes;
mod decode;
mod display;
mod error;
mod file;
mod path;
mod render;
mod stats;
mod value;

/// Decoder entry points and options.
pub use decode::{DecodeOptions, MAX_DEPTH_LIMIT, decode, decode_with};
/// Text-or-hex presentation policy and display transform.
pub use display::{SUBSTITUTION_MARKER, is_displayable, present, render_hex, to_display};
/// Error and result aliases.
pub use error::{BencodeError, Result};
/// File-backed document source.
pub use file::BencodeFile;
/// Value path parser and selector.
pub use path::{PathStep, ValuePath};
/// JSON serializer and one-shot preview pipeline.
pub use render::{RenderOptions, preview_bytes, render};
/// Tree shape statistics.
pub use stats::{ValueStats, top_level_keys};
/// Decoded value tree.
pub use value::Value;
