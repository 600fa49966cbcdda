//! Package registry ecosystems.

use std::fmt;

use serde::{Serialize, Serializer};

/// Registry namespace a dependency belongs to.
///
/// Every extractor reports identifiers for exactly one ecosystem; keeping
/// the set closed means a typo cannot silently mint a new output key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// JavaScript/Node packages (npm)
    Npm,
    /// Python packages (PyPI)
    PyPI,
}

impl Ecosystem {
    /// External tag used in serialized extraction results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::PyPI => "pypi",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Ecosystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Ecosystem::Npm.as_str(), "npm");
        assert_eq!(Ecosystem::PyPI.as_str(), "pypi");
    }

    #[test]
    fn test_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Ecosystem::Npm).unwrap(), "\"npm\"");
        assert_eq!(serde_json::to_string(&Ecosystem::PyPI).unwrap(), "\"pypi\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Ecosystem::Npm.to_string(), "npm");
    }
}
