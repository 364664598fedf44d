//! The extraction engine: per-file declaration scanning, configuration
//! mining, and the directory collector that ties them together

pub mod collector;
pub mod conf;
pub mod lints;

pub use collector::{CollectOptions, Harvest, collect};
pub use conf::extract_conf;
pub use lints::{ScanMode, ScanState, ScannedLint, StepOutcome, scan_file, step};
