//! Artifact kind detection and extractor dispatch
//!
//! This module maps file names to the extractor that understands their
//! contents. The caller still supplies the contents themselves; nothing
//! here touches the file system.

use crate::ecosystems::Ecosystem;
use crate::extractors::Extractor;
use crate::extractors::js_source::JsSourceExtractor;
use crate::extractors::lockfile::LockfileExtractor;
use crate::extractors::manifest::ManifestExtractor;
use crate::extractors::py_source::PySourceExtractor;
use crate::extractors::requirements::RequirementsExtractor;

/// Supported artifact kinds.
///
/// Each variant corresponds to one extractor and determines the ecosystem
/// tag its output carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// package.json manifest
    NpmManifest,
    /// package-lock.json / npm-shrinkwrap.json resolved tree
    NpmLockfile,
    /// JS-family source text (js, jsx, mjs, cjs, ts, tsx)
    JsSource,
    /// Python source text
    PySource,
    /// requirements.txt / constraints.txt declarations
    PipRequirements,
}

impl SourceKind {
    /// Detect the artifact kind from a file path.
    ///
    /// Returns `None` when the name matches no known dependency artifact.
    pub fn detect(path: &str) -> Option<Self> {
        let filename = path.rsplit('/').next().unwrap_or(path);
        if filename == "package-lock.json" || filename == "npm-shrinkwrap.json" {
            Some(SourceKind::NpmLockfile)
        } else if filename == "package.json" {
            Some(SourceKind::NpmManifest)
        } else if filename.ends_with(".txt")
            && (filename.contains("requirements") || filename.contains("constraints"))
        {
            Some(SourceKind::PipRequirements)
        } else {
            match filename.rsplit_once('.')?.1 {
                "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Some(SourceKind::JsSource),
                "py" => Some(SourceKind::PySource),
                _ => None,
            }
        }
    }

    /// Ecosystem this kind's extractor reports.
    pub fn ecosystem(self) -> Ecosystem {
        match self {
            SourceKind::NpmManifest | SourceKind::NpmLockfile | SourceKind::JsSource => {
                Ecosystem::Npm
            }
            SourceKind::PySource | SourceKind::PipRequirements => Ecosystem::PyPI,
        }
    }

    /// Extractor that understands this kind of artifact.
    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            SourceKind::NpmManifest => &ManifestExtractor,
            SourceKind::NpmLockfile => &LockfileExtractor,
            SourceKind::JsSource => &JsSourceExtractor,
            SourceKind::PySource => &PySourceExtractor,
            SourceKind::PipRequirements => &RequirementsExtractor,
        }
    }
}
