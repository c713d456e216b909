// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats and prints package summaries to the console.

use comfy_table::{Cell, Table};

use crate::package::Package;

/// Summarize the inspected packages to the console.
///
/// Prints one row per package with its name, NVR, source flag and the sizes
/// of its requirement and file lists.
pub fn summarize_packages(packages: &[Package]) {
    if packages.is_empty() {
        return;
    }
    println!("{}\n", package_table(packages));
    println!("Total: {} package(s) inspected", packages.len());
}

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

/// Create a table showing the metadata of each inspected package.
fn package_table(packages: &[Package]) -> Table {
    let mut table = default_table_preset();
    table.set_header(vec![
        Cell::new("Package").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("NVR").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Source").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Requires").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Files").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for package in packages {
        table.add_row(vec![
            Cell::new(package.filename()),
            Cell::new(package.nvr()),
            Cell::new(if package.is_source_package() {
                "yes"
            } else {
                "no"
            }),
            Cell::new(package.require_names().len()),
            Cell::new(package.files().len()),
        ]);
    }
    table
}
