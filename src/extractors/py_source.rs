//! Source scanner for Python import statements.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Extraction, Extractor, PackageRef};
use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// `import a.b, c` and `from a.b import x` statement heads.
static PY_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:from|import)\s+([\w.]+(?:\s*,\s*\w+)*)").unwrap());

/// Scans Python source text for top-level module references.
///
/// Registry names and importable module names diverge only in underscore
/// versus hyphen, so each module is emitted in both spellings.
#[derive(Debug, Default)]
pub struct PySourceExtractor;

impl PySourceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PySourceExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::PyPI
    }

    fn extract(&self, content: &str) -> Result<Extraction, ExtractError> {
        let mut modules = BTreeSet::new();
        for caps in PY_IMPORT.captures_iter(content) {
            for raw in caps[1].split(',') {
                let name = raw.trim();
                if name.is_empty() || name.starts_with('.') || name.starts_with('/') {
                    continue;
                }
                let top = name.split('.').next().unwrap_or(name);
                modules.insert(top.to_string());
                modules.insert(top.replace('_', "-"));
            }
        }
        Ok(Extraction::with_packages(
            Ecosystem::PyPI,
            modules.into_iter().map(PackageRef::bare).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        PySourceExtractor::new()
            .extract(content)
            .unwrap()
            .identifiers()
    }

    #[test]
    fn test_simple_import() {
        assert_eq!(extract("import requests\n"), vec!["requests"]);
    }

    #[test]
    fn test_underscore_yields_hyphen_variant() {
        assert_eq!(extract("import my_pkg\n"), vec!["my-pkg", "my_pkg"]);
    }

    #[test]
    fn test_from_import_truncates_to_top_level() {
        assert_eq!(
            extract("from flask.helpers import url_for\n"),
            vec!["flask"]
        );
    }

    #[test]
    fn test_comma_separated_names() {
        assert_eq!(extract("import os, sys\n"), vec!["os", "sys"]);
    }

    #[test]
    fn test_relative_imports_discarded() {
        let content = "from . import utils\nfrom .config import settings\n";
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_indented_import() {
        let content = "def lazy():\n    import numpy\n    return numpy\n";
        assert_eq!(extract(content), vec!["numpy"]);
    }

    #[test]
    fn test_deduplicates_repeated_imports() {
        let content = "import json\nfrom json import loads\n";
        assert_eq!(extract(content), vec!["json"]);
    }

    #[test]
    fn test_mixed_module_realistic() {
        let content = r#"
import os
import numpy as np
from pandas.core import frame
from . import local_helper

def main():
    import scikit_learn
"#;
        assert_eq!(
            extract(content),
            vec![
                "numpy",
                "os",
                "pandas",
                "scikit-learn",
                "scikit_learn"
            ]
        );
    }
}
