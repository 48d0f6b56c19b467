pub mod aggregate;
pub mod scan;
pub mod table;

/// Root directory scanned for prompt CSVs, relative to the working directory.
pub const ASSETS_DIR: &str = "assets";

/// Where the aggregated prompt JSON is written.
pub const OUTPUT_PATH: &str = "assets/prompts.json";
