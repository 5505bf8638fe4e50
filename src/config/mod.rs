mod settings;

pub use settings::{save_last_pattern_to, Config, EXAMPLE_CONFIG};
