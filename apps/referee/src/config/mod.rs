pub mod referee;

pub use referee::{ConfigError, RefereeConfig};
