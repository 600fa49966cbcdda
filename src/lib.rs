//! Depsource - dependency extraction from project artifacts
//!
//! This crate turns manifest files, lockfiles, and raw source text into
//! normalized, ecosystem-tagged package identifiers (`name` or
//! `name@version`) without running any package manager or build tool.

pub mod ecosystems;
pub mod error;
pub mod extractors;
pub mod file_types;
