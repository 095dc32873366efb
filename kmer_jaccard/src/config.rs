use std::path::{Path, PathBuf};

pub struct Config {
    kmer_files: [PathBuf; 2],
    output_file: Option<PathBuf>,
}

impl Config {
    pub fn new(kmer_files: [PathBuf; 2], output_file: Option<PathBuf>) -> Self {
        Self {
            kmer_files,
            output_file,
        }
    }

    pub fn kmer_files(&self) -> &[PathBuf; 2] {
        &self.kmer_files
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}
