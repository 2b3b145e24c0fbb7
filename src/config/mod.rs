//! JSON configuration for the `roi_edges` tool.
pub mod tool;

pub use tool::{load_config, EdgeOutputConfig, EdgeToolConfig, InputSource, SyntheticPattern};
