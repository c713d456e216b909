// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A quality-gate helper for inspecting RPM package metadata.
//!
//! This crate provides functionality to:
//! - Parse the header of an RPM archive without touching its payload
//! - Expose package name, NVR, declared requirements and shipped files
//! - Append failed check details to a shared result artifact
//! - Generate machine-readable metadata reports

pub mod package;
pub mod report;

// Re-export key types for convenience
pub use package::{Package, PackageError};
pub use report::{write_to_artifact, Report, BUG_URL};
