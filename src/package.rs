// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Wraps a single RPM archive and exposes the header metadata needed by the
//! version gate checks: package name, NVR, declared requirements and the
//! shipped file list.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rpm::{Dependency, DependencyFlags, PackageMetadata};
use thiserror::Error;

/// Filename suffix identifying source packages.
const SOURCE_PACKAGE_SUFFIX: &str = ".src.rpm";

/// Result type for package operations.
pub type PackageResult<T> = std::result::Result<T, PackageError>;

/// Errors that can occur while reading a package header.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Failed to open package file: {filename}")]
    OpenFailed {
        filename: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse package header: {filename}")]
    HeaderParseFailed {
        filename: String,
        #[source]
        source: rpm::Error,
    },
}

/// Package struct holding the parsed header of a single RPM archive.
///
/// The header is parsed once at construction; all accessors are pure reads of
/// the in-memory header and never touch the file again.
#[derive(Debug)]
pub struct Package {
    filename: String,
    path: PathBuf,
    header: PackageMetadata,
    // To be populated by the first check that scans for Python versions.
    py_versions: Option<BTreeSet<String>>,
}

impl Package {
    /// Create a new package from a filepath.
    ///
    /// Reads the lead and headers from the archive, leaving the payload
    /// untouched. The file handle is released before this returns, on success
    /// and on failure alike.
    ///
    /// # Errors
    /// Returns a [`PackageError`] if the file cannot be opened or its header
    /// cannot be parsed. Construction never yields a partially initialized
    /// package.
    pub fn new(path: PathBuf) -> PackageResult<Self> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let file = File::open(&path).map_err(|e| PackageError::OpenFailed {
            filename: filename.clone(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);
        let header =
            PackageMetadata::parse(&mut reader).map_err(|e| PackageError::HeaderParseFailed {
                filename: filename.clone(),
                source: e,
            })?;

        Ok(Self {
            filename,
            path,
            header,
            py_versions: None,
        })
    }

    /// Get the base name of the archive file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the path to the package.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this is a source package, judged by the filename suffix.
    #[must_use]
    pub fn is_source_package(&self) -> bool {
        self.filename.ends_with(SOURCE_PACKAGE_SUFFIX)
    }

    /// Package name as a string.
    #[must_use]
    pub fn name(&self) -> String {
        self.header.get_name().unwrap_or_default().to_string()
    }

    /// Package name-version-release identifier as a string.
    #[must_use]
    pub fn nvr(&self) -> String {
        match (
            self.header.get_name(),
            self.header.get_version(),
            self.header.get_release(),
        ) {
            (Ok(name), Ok(version), Ok(release)) => format!("{name}-{version}-{release}"),
            _ => String::new(),
        }
    }

    /// Names of the declared requirements, in header order.
    ///
    /// Parallel to [`Self::require_nevrs`]: same length, same order,
    /// duplicates possible.
    #[must_use]
    pub fn require_names(&self) -> Vec<String> {
        self.requires().iter().map(|dep| dep.name.clone()).collect()
    }

    /// Version-qualified requirement strings, in header order.
    ///
    /// Unversioned requirements yield the bare name; versioned ones yield
    /// `name <op> version` with the epoch embedded in the version part, the
    /// way rpm itself formats NEVRS.
    #[must_use]
    pub fn require_nevrs(&self) -> Vec<String> {
        self.requires().iter().map(requirement_string).collect()
    }

    /// Paths of the files shipped by the package, in header order.
    #[must_use]
    pub fn files(&self) -> Vec<String> {
        self.header
            .get_file_paths()
            .unwrap_or_default()
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect()
    }

    /// Python versions found in this package by the first relevant check.
    ///
    /// `None` means no check has scanned this package yet, which is distinct
    /// from `Some` of an empty set (scanned, nothing found).
    #[must_use]
    pub fn py_versions(&self) -> Option<&BTreeSet<String>> {
        self.py_versions.as_ref()
    }

    /// Store the scanned Python versions. Written once, by the caller that
    /// performs the scan; there is no internal synchronization.
    pub fn set_py_versions(&mut self, versions: BTreeSet<String>) {
        self.py_versions = Some(versions);
    }

    fn requires(&self) -> Vec<Dependency> {
        self.header.get_requires().unwrap_or_default()
    }
}

/// Format a requirement the way rpm renders version-qualified requirements.
fn requirement_string(dep: &Dependency) -> String {
    if dep.version.is_empty() {
        return dep.name.clone();
    }
    let op = if dep.flags.contains(DependencyFlags::LESS | DependencyFlags::EQUAL) {
        "<="
    } else if dep.flags.contains(DependencyFlags::GREATER | DependencyFlags::EQUAL) {
        ">="
    } else if dep.flags.contains(DependencyFlags::LESS) {
        "<"
    } else if dep.flags.contains(DependencyFlags::GREATER) {
        ">"
    } else {
        "="
    };
    format!("{} {} {}", dep.name, op, dep.version)
}
