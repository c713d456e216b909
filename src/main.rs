// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use args::Args;
use python_versions_check::package::{Package, PackageError, PackageResult};
use python_versions_check::report::{summarize_packages, write_to_artifact, Report};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut packages = Vec::new();
    let mut failures = 0usize;
    for path in &args.packages {
        // One bad archive must not abort the batch; report it and move on.
        match inspect_package(path) {
            Ok(package) => packages.push(package),
            Err(err) => {
                failures += 1;
                let message = failure_message(&err);
                eprintln!("ERROR: {message}");
                if let Some(artifact) = &args.artifact {
                    write_to_artifact(artifact, &message, &args.info_url)
                        .with_context(|| {
                            format!("Failed to write to artifact: {}", artifact.display())
                        })?;
                }
            }
        }
    }

    summarize_packages(&packages);

    if let Some(dest) = &args.json {
        write_reports_to_file(&packages, dest)?;
    }

    if failures > 0 {
        return Err(anyhow::anyhow!("Failed to inspect {failures} package(s)"));
    }
    Ok(())
}

/// Read the package header from a filepath.
///
/// # Errors
/// Returns an error if the archive cannot be opened or its header cannot be
/// parsed.
fn inspect_package(path: &Path) -> PackageResult<Package> {
    eprintln!("Inspecting package: package={}", path.display());

    let package = Package::new(path.to_path_buf())?;

    eprintln!(
        "Inspection completed: package={}, nvr={}, files={}",
        path.display(),
        package.nvr(),
        package.files().len()
    );
    Ok(package)
}

/// Render a package failure for the console and the artifact block.
fn failure_message(err: &PackageError) -> String {
    match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

/// Write the metadata reports to a file.
///
/// # Errors
/// Returns an error if the reports cannot be serialized to JSON or if the
/// file cannot be created.
fn write_reports_to_file(packages: &[Package], dest: &Path) -> Result<()> {
    eprintln!("Writing report to file: file={}", dest.display());
    let reports: Vec<Report> = packages.iter().map(Report::new).collect();
    let file = File::create(dest)
        .with_context(|| format!("Failed to create JSON output file: {}", dest.display()))?;
    serde_json::to_writer_pretty(file, &reports)
        .with_context(|| format!("Failed to serialize report to JSON: {}", dest.display()))?;
    Ok(())
}
