// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::Parser;
use std::path::PathBuf;

/// Default documentation URL included in failure blocks.
const DEFAULT_INFO_URL: &str = "https://fedoraproject.org/wiki/Packaging:Python";

#[derive(Parser)]
#[command(name = "python-versions-check")]
#[command(version)]
#[command(about = "Inspects RPM package metadata for the python-versions quality gate")]
pub(crate) struct Args {
    /// Paths to the RPM packages to inspect.
    #[arg(required = true)]
    pub packages: Vec<PathBuf>,

    /// Path to the shared result artifact. Failure details are appended to it.
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Documentation URL referenced in appended failure blocks.
    #[arg(long, default_value = DEFAULT_INFO_URL)]
    pub info_url: String,

    /// Path to the file to write the package metadata in JSON format.
    #[arg(long)]
    pub json: Option<PathBuf>,
}
