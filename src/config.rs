use serde::{Deserialize, Serialize};

/// Engine construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Path to the sequence database file.
    pub path: String,

    /// Minimum relative support threshold, in `[0, 1]`.
    pub minsup: f64,

    /// Minimum confidence threshold, in `[0, 1]`.
    pub minconf: f64,

    /// Destination path if `write` is set.
    pub output_path: String,

    /// If set, write each rule to standard output as it is found.
    pub verbose: bool,

    /// If set, write each rule to `output_path` once mining completes.
    pub write: bool,
}

impl MinerConfig {
    /// Configuration for running against `path` with the given thresholds,
    /// printing to stdout and writing nothing to disk.
    pub fn new(path: impl Into<String>, minsup: f64, minconf: f64) -> Self {
        Self {
            path: path.into(),
            minsup,
            minconf,
            output_path: "output.txt".to_string(),
            verbose: true,
            write: false,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = output_path.into();
        self.write = true;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
