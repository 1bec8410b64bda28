//! Metadata dump loader
//!
//! Reads module dumps (JSON) from a single file or from the direct children
//! of a directory. Inside a directory, files that cannot be read as a module
//! are reported and left out of the universe.

use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{CatalogError, Result};

use super::model::{ModuleDump, TypeUniverse};

/// Default file name patterns considered inside a directory
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["*.json"];

/// Controls which files of a directory are read
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Glob patterns matched against file names; empty means every file
    pub include: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LoadOptions {
    fn compile_patterns(&self) -> Result<Vec<Pattern>> {
        self.include
            .iter()
            .map(|p| Pattern::new(p).map_err(CatalogError::from))
            .collect()
    }
}

/// Read a single module dump
pub fn read_module(path: &Path) -> Result<ModuleDump> {
    let content = fs::read_to_string(path)?;
    let mut module: ModuleDump = serde_json::from_str(&content)?;
    if module.name.is_empty() {
        module.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
    }
    Ok(module)
}

/// Build a type universe from a dump file or a directory of dumps.
///
/// An explicitly named file must parse. Directory entries are visited in file
/// name order; unreadable ones are skipped with a warning.
pub fn load_universe(source: &Path, options: &LoadOptions) -> Result<TypeUniverse> {
    if !source.exists() {
        return Err(CatalogError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let mut universe = TypeUniverse::new();

    if source.is_file() {
        let module = read_module(source)?;
        tracing::info!(module = %module.name, types = module.types.len(), "read module");
        universe.push_module(module);
        return Ok(universe);
    }

    let patterns = options.compile_patterns()?;

    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "cannot access directory entry, skipping");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !patterns.is_empty() && !patterns.iter().any(|p| p.matches(&file_name)) {
            tracing::debug!(file = %file_name, "not a module dump, ignoring");
            continue;
        }

        match read_module(entry.path()) {
            Ok(module) => {
                tracing::info!(module = %module.name, types = module.types.len(), "read module");
                universe.push_module(module);
            }
            Err(e) => {
                tracing::warn!(
                    path = %entry.path().display(),
                    error = %e,
                    "does not contain type metadata, skipping"
                );
            }
        }
    }

    Ok(universe)
}
