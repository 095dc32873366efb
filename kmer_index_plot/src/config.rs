use std::path::{Path, PathBuf};

/// Config
///
/// Read only configuration generated from the command line arguments
///
/// input - CSV file with Size_MB, N and k columns
/// output - image file for the plot
///
pub struct Config {
    input: PathBuf,
    output: PathBuf,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
