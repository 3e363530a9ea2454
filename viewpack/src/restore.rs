//! Writing embedded assets back onto a real filesystem.
//!
//! Restoration walks the virtual tree from a starting path. Directories are
//! recursed into, assets are written with the permission bits and
//! modification time recorded in their metadata. The first failure stops the
//! walk; files already written stay on disk.
use std::fs;
use std::path::Path;

use filetime::FileTime;

use crate::error::{Error, Result};
use crate::path::{canonical_name, file_path, join};
use crate::registry::Registry;

pub const DEFAULT_DIR_MODE: u32 = 0o755;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Mode for directories created along the way (before umask).
    pub dir_mode: u32,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        RestoreOptions {
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

/// Restores the asset or directory `name` under `dir`. The empty name
/// restores the whole bundle.
pub fn restore(registry: &Registry, dir: &Path, name: &str) -> Result<()> {
    restore_with_options(registry, dir, name, &RestoreOptions::default())
}

pub fn restore_with_options(
    registry: &Registry,
    dir: &Path,
    name: &str,
    options: &RestoreOptions,
) -> Result<()> {
    let name = canonical_name(name);
    match registry.list_children(&name) {
        Ok(children) => {
            for child in children {
                restore_with_options(registry, dir, &join(&name, &child), options)?;
            }
            Ok(())
        }
        Err(Error::NotADirectory(_)) => restore_asset_with_options(registry, dir, &name, options),
        Err(err) => Err(err),
    }
}

/// Restores the single asset `name` under `dir`.
pub fn restore_asset(registry: &Registry, dir: &Path, name: &str) -> Result<()> {
    restore_asset_with_options(registry, dir, name, &RestoreOptions::default())
}

pub fn restore_asset_with_options(
    registry: &Registry,
    dir: &Path,
    name: &str,
    options: &RestoreOptions,
) -> Result<()> {
    let data = registry.bytes(name)?;
    let info = registry.info(name)?;
    let output_path = file_path(dir, name);

    if let Some(parent) = output_path.parent() {
        create_dirs(parent, options.dir_mode)?;
    }

    fs::write(&output_path, &data).map_err(|e| Error::io(&output_path, e))?;
    set_mode(&output_path, info.permissions()).map_err(|e| Error::io(&output_path, e))?;

    let mtime = FileTime::from_unix_time(
        info.mod_time.timestamp(),
        info.mod_time.timestamp_subsec_nanos(),
    );
    filetime::set_file_times(&output_path, mtime, mtime).map_err(|e| Error::io(&output_path, e))?;

    tracing::debug!(
        asset = %info.name,
        path = %output_path.display(),
        bytes = data.len(),
        "restored asset"
    );
    Ok(())
}

fn create_dirs(path: &Path, mode: u32) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path).map_err(|e| Error::io(path, e))
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, permissions)
}
