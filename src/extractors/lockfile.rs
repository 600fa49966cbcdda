//! Extractor for resolved lockfiles (package-lock.json).

use serde_json::Value;

use super::version::resolve_floor;
use super::{Extraction, Extractor, PackageRef};
use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// Extracts installed dependency versions from a package-lock.json tree.
///
/// The root entry's declared dependency names are cross-referenced against
/// the resolved `packages` map to recover exact installed versions. A name
/// without a resolved entry falls back to the floor of its declared range,
/// then to the bare name.
#[derive(Debug, Default)]
pub struct LockfileExtractor;

impl LockfileExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract from an already-parsed lockfile document.
    ///
    /// A lockfile without a non-empty `packages` map is malformed, not
    /// merely empty.
    pub fn extract_value(&self, lockfile: &Value) -> Result<Extraction, ExtractError> {
        let packages = lockfile
            .get("packages")
            .and_then(Value::as_object)
            .filter(|tree| !tree.is_empty())
            .ok_or(ExtractError::InvalidLockfile)?;

        let declared = packages
            .get("")
            .and_then(|root| root.get("dependencies"))
            .and_then(Value::as_object);

        let mut out = Extraction::new(Ecosystem::Npm);
        let Some(declared) = declared else {
            return Ok(out);
        };

        for (name, range) in declared {
            // Resolved entries are keyed by install path; top-level installs
            // live under "node_modules/<name>".
            let resolved = packages
                .get(name.as_str())
                .or_else(|| packages.get(format!("node_modules/{name}").as_str()));
            let version = resolved
                .and_then(|entry| entry.get("version"))
                .and_then(Value::as_str);
            match version {
                Some(version) => out.packages.push(PackageRef::pinned(name, version)),
                None => {
                    tracing::debug!("no resolved entry for {}, using declared range", name);
                    match range.as_str().and_then(resolve_floor) {
                        Some(floor) => out.packages.push(PackageRef::pinned(name, floor)),
                        None => out.packages.push(PackageRef::bare(name)),
                    }
                }
            }
        }
        Ok(out)
    }
}

impl Extractor for LockfileExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn extract(&self, content: &str) -> Result<Extraction, ExtractError> {
        let lockfile: Value = serde_json::from_str(content)?;
        self.extract_value(&lockfile)
    }
}
