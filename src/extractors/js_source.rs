//! Source scanner for JS-family module references.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Extraction, Extractor, PackageRef};
use crate::ecosystems::Ecosystem;
use crate::error::ExtractError;

/// `import d from "m"`, `import { a, b } from "m"`, `import * as ns from "m"`
/// and combinations of default and named forms.
static ES_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import(?:(?:(?:[ \n\t]+(?:[^ *\n\t\{\},]+)[ \n\t]*(?:,|[ \n\t]+))?(?:[ \n\t]*\{(?:[ \n\t]*[^ \n\t"'\{\}]+[ \n\t]*,?)+\})?[ \n\t]*)|[ \n\t]*\*[ \n\t]*as[ \n\t]+(?:[^ \n\t\{\}]+)[ \n\t]+)from[ \n\t]*["']([^"'\n]+)["']"#,
    )
    .unwrap()
});

/// Dynamic `import("m")` calls.
static DYNAMIC_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:\W|^)import\(["']([^"']+)["']\)"#).unwrap());

/// CommonJS `require("m")` calls.
static REQUIRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:\W|^)require\(["']([^"']+)["']\)"#).unwrap());

/// Scans JS/TS source text for referenced modules.
///
/// Specifiers starting with `.` or `/` denote local files rather than
/// registry packages and are discarded. Output is de-duplicated across all
/// three reference styles.
#[derive(Debug, Default)]
pub struct JsSourceExtractor;

impl JsSourceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for JsSourceExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn extract(&self, content: &str) -> Result<Extraction, ExtractError> {
        let mut modules = BTreeSet::new();
        for pattern in [&ES_IMPORT, &DYNAMIC_IMPORT, &REQUIRE] {
            for caps in pattern.captures_iter(content) {
                let module = &caps[1];
                if !module.starts_with('.') && !module.starts_with('/') {
                    modules.insert(module.to_string());
                }
            }
        }
        Ok(Extraction::with_packages(
            Ecosystem::Npm,
            modules.into_iter().map(PackageRef::bare).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        JsSourceExtractor::new()
            .extract(content)
            .unwrap()
            .identifiers()
    }

    #[test]
    fn test_default_import() {
        assert_eq!(extract(r#"import React from "react";"#), vec!["react"]);
    }

    #[test]
    fn test_named_imports() {
        assert_eq!(
            extract(r#"import { debounce, throttle } from "lodash";"#),
            vec!["lodash"]
        );
    }

    #[test]
    fn test_namespace_import() {
        assert_eq!(extract(r#"import * as d3 from "d3";"#), vec!["d3"]);
    }

    #[test]
    fn test_default_and_named_combined() {
        assert_eq!(
            extract(r#"import axios, { AxiosError } from "axios";"#),
            vec!["axios"]
        );
    }

    #[test]
    fn test_dynamic_import() {
        assert_eq!(
            extract(r#"const chalk = await import("chalk");"#),
            vec!["chalk"]
        );
    }

    #[test]
    fn test_require() {
        assert_eq!(
            extract(r#"const express = require('express');"#),
            vec!["express"]
        );
    }

    #[test]
    fn test_scoped_package() {
        assert_eq!(
            extract(r#"import { parse } from "@babel/core";"#),
            vec!["@babel/core"]
        );
    }

    #[test]
    fn test_subpath_specifier_kept_whole() {
        assert_eq!(
            extract(r#"import get from "lodash/get";"#),
            vec!["lodash/get"]
        );
    }

    #[test]
    fn test_dedupes_across_reference_styles() {
        let content = r#"
import ms from "ms";
const again = await import("ms");
const cjs = require("ms");
"#;
        assert_eq!(extract(content), vec!["ms"]);
    }

    #[test]
    fn test_relative_and_absolute_paths_discarded() {
        let content = r#"
import local from "./local";
import parent from "../lib/parent";
const abs = require("/opt/tool");
const dyn = await import("./lazy");
import real from "react";
"#;
        assert_eq!(extract(content), vec!["react"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let content = r#"
import z from "zod";
import a from "axios";
import m from "moment";
"#;
        assert_eq!(extract(content), vec!["axios", "moment", "zod"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(extract("function main() {}\n").is_empty());
    }
}
