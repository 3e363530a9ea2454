use std::io::Write;
use std::path::Path;

use viewpack::{Registry, RestoreOptions};

use crate::error::Result;

pub fn restore<W: Write>(
    registry: &Registry,
    path: &str,
    destination: &Path,
    options: &RestoreOptions,
    out: &mut W,
) -> Result<()> {
    tracing::info!(
        path = %path,
        destination = %destination.display(),
        "restoring bundle"
    );
    viewpack::restore_with_options(registry, destination, path, options)?;

    let what = if path.is_empty() { "bundle" } else { path };
    writeln!(out, "Restored '{}' to {}", what, destination.display())?;
    Ok(())
}
