//! Blobs, asset metadata and the per-asset generator.
//!
//! A [`Blob`] is the compressed payload of one asset as it sits in the
//! binary. An [`AssetEntry`] pairs a blob with its [`AssetInfo`] and acts as
//! the asset's generator: every call to [`AssetEntry::load`] decompresses the
//! blob again and hands the caller a fresh, owned [`Asset`].
use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::compression::CompressionType;
use crate::error::{Error, Result};

/// Compressed payload of a single asset.
#[derive(Debug, Clone)]
pub struct Blob {
    pub compression: CompressionType,
    pub data: Cow<'static, [u8]>,
}

impl Blob {
    pub fn new(compression: CompressionType, data: impl Into<Cow<'static, [u8]>>) -> Blob {
        Blob {
            compression,
            data: data.into(),
        }
    }

    pub fn gzip(data: impl Into<Cow<'static, [u8]>>) -> Blob {
        Blob::new(CompressionType::Gzip, data)
    }

    /// Length of the compressed payload.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Metadata recorded for an asset when the bundle was built.
///
/// Nothing here is derived from the decompressed bytes; `size` is expected to
/// match their length, which [`crate::Registry::verify`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetInfo {
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub mod_time: DateTime<Utc>,
}

impl AssetInfo {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mode: u32,
        mod_time: DateTime<Utc>,
    ) -> AssetInfo {
        AssetInfo {
            name: name.into(),
            size,
            mode,
            mod_time,
        }
    }

    /// Assets are always leaves.
    pub fn is_dir(&self) -> bool {
        false
    }

    /// Permission bits only, without file type bits.
    pub fn permissions(&self) -> u32 {
        self.mode & 0o7777
    }
}

/// Decompressed contents of an asset together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub info: AssetInfo,
}

/// Generator for one asset: a blob and the metadata that goes with it.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub blob: Blob,
    pub info: AssetInfo,
}

impl AssetEntry {
    pub fn new(blob: Blob, info: AssetInfo) -> AssetEntry {
        AssetEntry { blob, info }
    }

    /// Decompresses the blob. Nothing is cached.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        tracing::trace!(
            asset = %self.info.name,
            compressed = self.blob.len(),
            "decompressing asset"
        );
        self.blob
            .compression
            .decompress(&self.blob.data)
            .map_err(|source| Error::Decompression {
                name: self.info.name.clone(),
                source,
            })
    }

    pub fn load(&self) -> Result<Asset> {
        Ok(Asset {
            bytes: self.bytes()?,
            info: self.info.clone(),
        })
    }
}

/// A bundle entry as laid out in static data: name, payload and the
/// metadata captured from the source file at build time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFile {
    pub name: &'static str,
    pub compression: CompressionType,
    pub data: &'static [u8],
    pub size: u64,
    pub mode: u32,
    /// Seconds since the Unix epoch.
    pub mod_time: i64,
}

impl EmbeddedFile {
    pub fn entry(&self) -> Result<AssetEntry> {
        let mod_time = DateTime::from_timestamp(self.mod_time, 0).ok_or_else(|| {
            Error::InvalidBundle(format!(
                "asset {} has an out of range modification time {}",
                self.name, self.mod_time
            ))
        })?;
        Ok(AssetEntry::new(
            Blob::new(self.compression, self.data),
            AssetInfo::new(self.name, self.size, self.mode, mod_time),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOVER_TEXT_GZ: &[u8] = b"\x1f\x8b\x08\x00\x00\x09\x6e\x88\x00\xff\
        \xaa\xae\xd6\xf3\xc9\xcc\xcb\xae\xad\x05\x04\x00\x00\xff\xff\
        \x41\xf7\xa1\x3d\x09\x00\x00\x00";

    fn entry() -> AssetEntry {
        EmbeddedFile {
            name: "recover-text.email",
            compression: CompressionType::Gzip,
            data: RECOVER_TEXT_GZ,
            size: 9,
            mode: 0o666,
            mod_time: 1422773459,
        }
        .entry()
        .unwrap()
    }

    #[test]
    fn load_pairs_bytes_with_metadata() {
        let asset = entry().load().unwrap();
        assert_eq!(asset.bytes, b"{{.Link}}");
        assert_eq!(asset.info.size, asset.bytes.len() as u64);
        assert_eq!(asset.info.mod_time.timestamp(), 1422773459);
        assert!(!asset.info.is_dir());
    }

    #[test]
    fn every_load_decompresses_again() {
        let entry = entry();
        assert_eq!(entry.bytes().unwrap(), entry.bytes().unwrap());
    }

    #[test]
    fn corrupt_blob_reports_the_asset_name() {
        let entry = AssetEntry::new(
            Blob::gzip(&RECOVER_TEXT_GZ[..12]),
            AssetInfo::new("broken.tpl", 9, 0o644, Utc::now()),
        );
        match entry.load() {
            Err(Error::Decompression { name, .. }) => assert_eq!(name, "broken.tpl"),
            other => panic!("expected decompression error, got {:?}", other),
        }
    }

    #[test]
    fn info_serializes_to_json() {
        let json = serde_json::to_value(&entry().info).unwrap();
        assert_eq!(json["name"], "recover-text.email");
        assert_eq!(json["size"], 9);
        assert_eq!(json["mode"], 0o666);
        assert_eq!(json["mod_time"], "2015-02-01T06:50:59Z");
    }
}
