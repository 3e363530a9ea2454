//! View templates embedded in the binary
//!
//! `viewpack` ships the HTML templates and email bodies used by the
//! authentication views as gzip-compressed blobs compiled into the crate, and
//! exposes them through a small read-only virtual filesystem.
//!
//! - [`Registry`] maps a canonical path (`/` separated; `\` is accepted and
//!   rewritten) to the asset's generator. It answers byte and metadata
//!   lookups and lists every registered name.
//! - [`tree::VirtualTree`] mirrors the source hierarchy and is used to
//!   enumerate directories.
//! - [`restore()`] writes assets back to disk with their recorded permission
//!   bits and modification times.
//!
//! Assets are decompressed on every lookup; nothing is cached.
//!
//! ```rust,no_run
//! use viewpack::Registry;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let views = Registry::embedded()?;
//!     let login = views.bytes("login.tpl")?;
//!     println!("login.tpl: {} bytes", login.len());
//!
//!     viewpack::restore(&views, std::path::Path::new("/tmp/views"), "")?;
//!     Ok(())
//! }
//! ```

pub mod blob;
pub mod bundle;
pub mod compression;
pub mod error;
pub mod path;
pub mod registry;
pub mod restore;
pub mod tree;

pub use blob::{Asset, AssetEntry, AssetInfo, Blob, EmbeddedFile};
pub use compression::CompressionType;
pub use error::{Error, Result};
pub use registry::Registry;
pub use restore::{
    restore, restore_asset, restore_asset_with_options, restore_with_options, RestoreOptions,
};
