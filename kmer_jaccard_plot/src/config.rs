use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "results/plots";

pub struct Config {
    input: PathBuf,
    output_dir: PathBuf,
}

impl Config {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn set_output_dir(&mut self, d: PathBuf) {
        self.output_dir = d
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
