use std::io::{self, Write};

use log::debug;

use crate::steplib::{Manifest, Step};

/// Ids of every step carrying a deprecation note, sorted by id.
pub fn select_deprecated(manifest: &mut Manifest) -> Vec<String> {
    manifest.assign_step_ids();
    manifest
        .steps
        .values()
        .filter(|step| step.is_deprecated())
        .inspect(|step| log_deprecation(step))
        .map(|step| step.id.clone())
        .collect()
}

fn log_deprecation(step: &Step) {
    debug!(
        "report: {} (latest {}, {} versions, icon {}) deprecated: {}",
        step.id,
        step.latest_version_number,
        step.versions.len(),
        step.info.asset_urls.icon_svg,
        step.info.deprecate_notes
    );
}

/// Print `ids` as a two-space indented JSON array followed by a blank line.
pub fn write_report<W: Write>(out: &mut W, ids: &[String]) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(ids)?;
    writeln!(out, "{rendered}")?;
    writeln!(out)?;
    out.flush()
}
