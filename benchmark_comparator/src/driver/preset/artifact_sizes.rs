//!
//! The size of the build artifacts of a preset.
//!

use std::path::Path;

///
/// The total size of the libraries and executables found in a build tree.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSizes {
    /// The number of artifacts.
    pub files: usize,
    /// The total size in bytes.
    pub bytes: u64,
}

impl ArtifactSizes {
    /// The library file extensions.
    const LIBRARY_EXTENSIONS: [&'static str; 5] = ["a", "so", "dylib", "dll", "lib"];

    ///
    /// Walks `directory` recursively. Returns `None` if it does not exist.
    ///
    pub fn collect(directory: &Path) -> anyhow::Result<Option<Self>> {
        if !directory.is_dir() {
            return Ok(None);
        }

        let pattern = format!(
            "{}/**/*",
            glob::Pattern::escape(directory.to_string_lossy().as_ref())
        );
        let mut sizes = Self::default();
        for path in glob::glob(pattern.as_str())?.filter_map(Result::ok) {
            let metadata = match std::fs::metadata(path.as_path()) {
                Ok(metadata) if metadata.is_file() => metadata,
                _ => continue,
            };
            if Self::is_artifact(path.as_path(), &metadata) {
                sizes.files += 1;
                sizes.bytes += metadata.len();
            }
        }
        Ok(Some(sizes))
    }

    ///
    /// Whether the file is a library or an executable.
    ///
    fn is_artifact(path: &Path, metadata: &std::fs::Metadata) -> bool {
        let extension = path
            .extension()
            .map(|extension| extension.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some(extension) if Self::LIBRARY_EXTENSIONS.contains(&extension) => true,
            Some("exe") => true,
            _ => Self::is_executable(metadata),
        }
    }

    #[cfg(unix)]
    fn is_executable(metadata: &std::fs::Metadata) -> bool {
        use std::os::unix::fs::PermissionsExt;

        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    fn is_executable(_metadata: &std::fs::Metadata) -> bool {
        false
    }
}

impl std::fmt::Display for ArtifactSizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} files, {} bytes", self.files, self.bytes)
    }
}
