//! JSON configuration for the command-line tools.

pub mod matting;

pub use matting::{load_config, MattingOutputConfig, MattingToolConfig};
