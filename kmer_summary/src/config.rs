use std::path::{Path, PathBuf};

/// Config
///
/// output - summary CSV file
/// jaccard_files - files with a single jaccard score each
/// skani_files - skani reports
///
pub struct Config {
    output: PathBuf,
    jaccard_files: Vec<PathBuf>,
    skani_files: Vec<PathBuf>,
}

impl Config {
    pub fn new(output: PathBuf, jaccard_files: Vec<PathBuf>, skani_files: Vec<PathBuf>) -> Self {
        Self {
            output,
            jaccard_files,
            skani_files,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn jaccard_files(&self) -> &[PathBuf] {
        &self.jaccard_files
    }

    pub fn skani_files(&self) -> &[PathBuf] {
        &self.skani_files
    }
}
