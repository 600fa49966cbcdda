//! Extractors for dependency-bearing project artifacts.
//!
//! Every extractor is a stateless, pure function over one artifact's
//! contents: it returns the packages the artifact declares or references,
//! tagged with the registry ecosystem they belong to. The two JSON-based
//! extractors additionally accept an already-parsed document through their
//! inherent `extract_value` methods.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// A normalized package reference extracted from an artifact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageRef {
    /// Package name as published in the registry
    pub name: String,
    /// Concrete version, when one could be determined
    pub version: Option<String>,
}

impl PackageRef {
    /// Reference with no version annotation.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Reference annotated with a concrete version.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

impl Serialize for PackageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of one extractor invocation.
///
/// All packages in one result carry the same ecosystem tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Registry namespace the packages belong to
    pub ecosystem: Ecosystem,
    /// Extracted references, in extractor-specific order
    pub packages: Vec<PackageRef>,
}

impl Extraction {
    /// Empty result for the given ecosystem.
    pub fn new(ecosystem: Ecosystem) -> Self {
        Self {
            ecosystem,
            packages: Vec::new(),
        }
    }

    /// Result holding the given references.
    pub fn with_packages(ecosystem: Ecosystem, packages: Vec<PackageRef>) -> Self {
        Self {
            ecosystem,
            packages,
        }
    }

    /// Serialized identifier strings (`name` or `name@version`).
    pub fn identifiers(&self) -> Vec<String> {
        self.packages.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for Extraction {
    // External form: {"npm": ["lodash@4.17.21", "left-pad"]}
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.ecosystem.as_str(), &self.packages)?;
        map.end()
    }
}

/// Trait for artifact extractors.
pub trait Extractor: Send + Sync {
    /// Ecosystem this extractor reports.
    fn ecosystem(&self) -> Ecosystem;

    /// Extract package references from the artifact's raw contents.
    fn extract(&self, content: &str) -> Result<Extraction, ExtractError>;
}

pub mod js_source;
pub mod lockfile;
pub mod manifest;
pub mod py_source;
pub mod requirements;
pub mod version;
