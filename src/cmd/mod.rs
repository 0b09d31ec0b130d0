/// Document shape statistics command.
pub mod info;
/// JSON preview command.
pub mod show;
mod util;
