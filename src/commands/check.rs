use anyhow::Result;

use webloader::application::check_manifest;

use super::{print_json, LoadedManifest};

/// Returns whether every entry resolved
pub fn cmd_check(loaded: &LoadedManifest, json: bool) -> Result<bool> {
    let report = check_manifest(&loaded.manifest, &loaded.base_dir)?;

    if json {
        print_json(&report)?;
        return Ok(report.is_ok());
    }

    for entry in &report.missing {
        println!("✗ {} '{}' does not exist", entry.kind, entry.path.display());
    }

    if report.is_ok() {
        println!(
            "✓ {} local entries resolved, {} remote",
            report.resolved, report.remote
        );
    } else {
        println!(
            "{} missing, {} resolved, {} remote",
            report.missing.len(),
            report.resolved,
            report.remote
        );
    }

    Ok(report.is_ok())
}
