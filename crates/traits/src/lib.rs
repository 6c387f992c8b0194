pub mod format;

pub use format::{FormattingPort, PlainFormatter};
