//! Extractor for package manifests (package.json).

use semver::Version;
use serde_json::Value;

use super::version::resolve_floor;
use super::{Extraction, Extractor, PackageRef};
use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// Extracts the declared `dependencies` table from a package.json manifest.
///
/// A spec that is already a pinned version is passed through verbatim;
/// range specifiers are reduced to their floor. Entries whose spec names no
/// version at all are emitted as bare names.
#[derive(Debug, Default)]
pub struct ManifestExtractor;

impl ManifestExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract from an already-parsed manifest document.
    ///
    /// Infallible: a manifest without a `dependencies` table is an empty
    /// result, not an error.
    pub fn extract_value(&self, manifest: &Value) -> Extraction {
        let mut out = Extraction::new(Ecosystem::Npm);
        let Some(dependencies) = manifest.get("dependencies").and_then(Value::as_object) else {
            return out;
        };
        for (name, spec) in dependencies {
            out.packages.push(annotate(name, spec));
        }
        out
    }
}

impl Extractor for ManifestExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn extract(&self, content: &str) -> Result<Extraction, ExtractError> {
        let manifest: Value = serde_json::from_str(content)?;
        Ok(self.extract_value(&manifest))
    }
}

/// Pair a dependency name with the best version its range spec admits.
fn annotate(name: &str, spec: &Value) -> PackageRef {
    let Some(spec) = spec.as_str() else {
        tracing::debug!("version spec for {} is not a string, emitting bare name", name);
        return PackageRef::bare(name);
    };
    if Version::parse(spec).is_ok() {
        // Already pinned, keep it verbatim.
        return PackageRef::pinned(name, spec);
    }
    match resolve_floor(spec) {
        Some(floor) => PackageRef::pinned(name, floor),
        None => {
            tracing::debug!("no resolvable version in {:?} for {}", spec, name);
            PackageRef::bare(name)
        }
    }
}
