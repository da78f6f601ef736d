use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::finding::Finding;
use crate::parse::language::Language;
use crate::parse::source::SourceFile;
use crate::parse::{ParseError, parse_source};
use crate::rule::registry::RuleRegistry;
use crate::rule::walker::walk;

#[derive(Debug)]
pub struct LintResult {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

/// Lint a SourceFile that is already in memory.
///
/// The tree is built, walked once, and dropped before returning. Nothing is
/// shared between calls, so independent files can be linted concurrently
/// against the same registry.
pub fn lint_source(
    source: &SourceFile,
    language: Language,
    registry: &RuleRegistry,
) -> Result<LintResult, ParseError> {
    let parse_start = Instant::now();
    let root = parse_source(source, language).inspect_err(|e| {
        warn!(path = %source.path_str(), %language, error = %e, "rejected source");
    })?;
    debug!(
        path = %source.path_str(),
        %language,
        bytes = source.as_bytes().len(),
        elapsed = ?parse_start.elapsed(),
        "parsed"
    );

    let walk_start = Instant::now();
    let findings = walk(&root, source, registry);
    debug!(
        path = %source.path_str(),
        rules = registry.len(),
        findings = findings.len(),
        elapsed = ?walk_start.elapsed(),
        "walked"
    );

    Ok(LintResult {
        path: source.path.clone(),
        findings,
    })
}

/// Read, parse and lint one file. The grammar is picked from the extension,
/// falling back to JavaScript.
pub fn lint_file(path: &Path, registry: &RuleRegistry) -> Result<LintResult> {
    let source = SourceFile::from_path(path)?;
    let language = match Language::from_path(path) {
        Some(language) => language,
        None => {
            let fallback = Language::default();
            debug!(path = %path.display(), %fallback, "unrecognized extension");
            fallback
        }
    };
    lint_source(&source, language, registry)
        .with_context(|| format!("failed to parse {}", path.display()))
}
