//! Extractor for pip requirement declarations (requirements.txt).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Extraction, Extractor, PackageRef};
use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// Lines that can declare a package: comment, blank, and option lines
/// (`-r`, `--index-url`) never start with an alphanumeric.
static PACKAGE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[A-Za-z0-9].*").unwrap());

/// Direct URL requirements (`https://...`) carry no registry name.
static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+://").unwrap());

/// Package name prefix per the requirement grammar.
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*[A-Za-z0-9]").unwrap());

/// One version-comparator clause: operator plus dotted/wildcard version.
static VERSION_SPECIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([=><!]+)\s*([0-9.*]+)").unwrap());

/// Extracts package names, and versions where a line pins one, from
/// requirements.txt-style text.
///
/// The version kept is the last `==` or lower-bound (`>`-bearing) clause on
/// the line; upper bounds and exclusions alone yield a bare name.
#[derive(Debug, Default)]
pub struct RequirementsExtractor;

impl RequirementsExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for RequirementsExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::PyPI
    }

    fn extract(&self, content: &str) -> Result<Extraction, ExtractError> {
        let mut packages = BTreeSet::new();
        for line in PACKAGE_LINE.find_iter(content) {
            let line = line.as_str();
            if URL_SCHEME.is_match(line) {
                tracing::debug!("skipping direct URL requirement: {}", line);
                continue;
            }
            let Some(name) = PACKAGE_NAME.find(line) else {
                continue;
            };
            let name = name.as_str();
            if line.contains('@') {
                // Direct reference syntax; whatever follows is not a
                // registry version.
                packages.insert(PackageRef::bare(name));
                continue;
            }
            let mut target = None;
            for caps in VERSION_SPECIFIER.captures_iter(line) {
                let relation = &caps[1];
                if relation == "==" || relation.contains('>') {
                    target = Some(caps[2].replace('*', "0"));
                }
            }
            packages.insert(match target {
                Some(version) => PackageRef::pinned(name, version),
                None => PackageRef::bare(name),
            });
        }
        Ok(Extraction::with_packages(
            Ecosystem::PyPI,
            packages.into_iter().collect(),
        ))
    }
}
