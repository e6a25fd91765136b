//!
//! Benchmark comparator output.
//!


pub mod csv;
pub mod file;
pub mod markdown;
pub mod terminal;

use std::path::Path;
use std::path::PathBuf;

use self::file::File;

///
/// A set of output files, structured as a file tree relative to some
/// user-provided output directory.
///
#[derive(Debug, Default)]
pub struct Output {
    /// The files to write.
    pub files: Vec<File>,
}

impl Output {
    ///
    /// Adds a file.
    ///
    pub fn push(&mut self, file: File) {
        self.files.push(file);
    }

    ///
    /// Writes all files under `directory`, creating missing parent directories.
    ///
    /// Returns the paths of the written files.
    ///
    pub fn write_to_directory(self, directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());
        for File {
            path: relative_path,
            content,
        } in self.files.into_iter()
        {
            let file_path = directory.join(relative_path);
            if let Some(parent) = file_path.parent() {
                std::fs::create_dir_all(parent).map_err(|error| {
                    anyhow::anyhow!("Output directory {parent:?} creating: {error}")
                })?;
            }
            std::fs::write(file_path.as_path(), content)
                .map_err(|error| anyhow::anyhow!("Output file {file_path:?} writing: {error}"))?;
            written.push(file_path);
        }
        Ok(written)
    }
}

impl From<File> for Output {
    fn from(file: File) -> Self {
        Self { files: vec![file] }
    }
}
