// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Report struct and public API for publishing inspection results.

mod artifact;
mod console;

pub use artifact::{write_to_artifact, BUG_URL};
pub use console::summarize_packages;

use serde::Serialize;

use crate::package::Package;

/// One declared requirement: its name and its version-qualified form.
#[derive(Debug, Serialize)]
pub struct Requirement {
    pub name: String,
    pub nevr: String,
}

/// Serializable snapshot of one package's metadata.
///
/// Written as JSON next to the gate result so downstream tooling does not
/// have to re-parse the archive.
#[derive(Debug, Serialize)]
pub struct Report {
    package: String,
    name: String,
    nvr: String,
    source_package: bool,
    requires: Vec<Requirement>,
    files: Vec<String>,
}

impl Report {
    /// Create a new report from an inspected package.
    #[must_use]
    pub fn new(package: &Package) -> Self {
        let requires = package
            .require_names()
            .into_iter()
            .zip(package.require_nevrs())
            .map(|(name, nevr)| Requirement { name, nevr })
            .collect();

        Self {
            package: package.path().to_string_lossy().to_string(),
            name: package.name(),
            nvr: package.nvr(),
            source_package: package.is_source_package(),
            requires,
            files: package.files(),
        }
    }
}
