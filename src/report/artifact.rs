// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Appends failed check details to the shared result artifact consumed by the
//! gating pipeline.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Where to complain when a gate result looks wrong.
pub const BUG_URL: &str = "https://github.com/fedora-python/task-python-versions/issues";

/// Append one failure block to the artifact file, creating it if needed.
///
/// `message` and `info_url` are written verbatim; callers must not pass text
/// containing the block delimiter expected downstream.
///
/// # Errors
/// Propagates any filesystem error unchanged. A failure here is a pipeline
/// infrastructure fault and is worth surfacing raw.
pub fn write_to_artifact(artifact: &Path, message: &str, info_url: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(artifact)?;
    write!(
        file,
        "\n\
         {message}\n\
         \n\
         Read the following document to find more information and a possible cause:\n\
         {info_url}\n\
         Or ask at #fedora-python IRC channel for help.\n\
         \n\
         If you think the result is false or intentional, file a bug against:\n\
         {bug_url}\n\
         \n\
         -----------\n",
        bug_url = BUG_URL,
    )
}
