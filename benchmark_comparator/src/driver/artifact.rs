//!
//! A benchmark executable.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::issue::Issue;

///
/// A benchmark executable built for one variant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The executable name suffix, e.g. `len_first`.
    pub suffix: &'static str,
    /// The variant the executable measures, e.g. `LEN_FIRST`.
    pub variant: &'static str,
    /// The executable path.
    pub path: PathBuf,
}

impl Artifact {
    /// The known executable suffixes and their variants, in execution and report order.
    pub const VARIANTS: [(&'static str, &'static str); 3] =
        [("naive", "NAIVE"), ("auto", "AUTO"), ("len_first", "LEN_FIRST")];

    ///
    /// The variant names in report order.
    ///
    pub fn variant_order() -> Vec<&'static str> {
        Self::VARIANTS
            .iter()
            .map(|(_suffix, variant)| *variant)
            .collect()
    }

    ///
    /// Looks up `<prefix>_<suffix>` in `directory` for every known suffix.
    ///
    /// Returns the found executables and an issue for each missing one.
    ///
    pub fn discover(directory: &Path, prefix: &str) -> (Vec<Self>, Vec<Issue>) {
        let mut artifacts = Vec::with_capacity(Self::VARIANTS.len());
        let mut issues = Vec::new();
        for (suffix, variant) in Self::VARIANTS.into_iter() {
            let path = directory.join(format!("{prefix}_{suffix}"));
            if path.is_file() {
                artifacts.push(Self {
                    suffix,
                    variant,
                    path,
                });
            } else {
                issues.push(Issue::MissingArtifact { path });
            }
        }
        (artifacts, issues)
    }

    ///
    /// The executable file name, used to identify it in diagnostics.
    ///
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}
