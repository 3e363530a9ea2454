use std::collections::HashMap;

use crate::blob::{Asset, AssetEntry, AssetInfo};
use crate::bundle;
use crate::error::{Error, Result};
use crate::path::canonical_name;
use crate::tree::VirtualTree;

/// Lookup surface over a bundle of assets.
///
/// Built once from a list of entries and read-only afterwards, so a single
/// value can be shared across threads by reference. Every key has a leaf at
/// the same path in the virtual tree and every leaf has a key.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<AssetEntry>,
    index: HashMap<String, usize>,
    tree: VirtualTree,
}

impl Registry {
    pub fn new<I>(entries: I) -> Result<Registry>
    where
        I: IntoIterator<Item = AssetEntry>,
    {
        let mut registry = Registry {
            entries: Vec::new(),
            index: HashMap::new(),
            tree: VirtualTree::new(),
        };
        for mut entry in entries {
            let name = canonical_name(&entry.info.name);
            let slot = registry.entries.len();
            // The tree rejects duplicates and file/directory clashes before
            // the key is indexed.
            registry.tree.insert(&name, slot)?;
            registry.index.insert(name.clone(), slot);
            entry.info.name = name;
            registry.entries.push(entry);
        }
        tracing::debug!(assets = registry.entries.len(), "asset registry built");
        Ok(registry)
    }

    /// Registry over the view bundle compiled into this crate.
    pub fn embedded() -> Result<Registry> {
        let entries = bundle::FILES
            .iter()
            .map(|file| file.entry())
            .collect::<Result<Vec<_>>>()?;
        Registry::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_name(name))
    }

    fn entry(&self, name: &str) -> Result<&AssetEntry> {
        self.index
            .get(&canonical_name(name))
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Decompressed contents of the asset at `name`.
    pub fn bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.entry(name)?.bytes()
    }

    /// Metadata of the asset at `name`. Does not touch the blob.
    pub fn info(&self, name: &str) -> Result<AssetInfo> {
        Ok(self.entry(name)?.info.clone())
    }

    pub fn asset(&self, name: &str) -> Result<Asset> {
        self.entry(name)?.load()
    }

    /// Every registered canonical path, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Children of the directory `name`; the empty path is the root.
    pub fn list_children(&self, name: &str) -> Result<Vec<String>> {
        self.tree.list_children(name)
    }

    /// Decompresses every asset and checks it against its declared size.
    pub fn verify(&self) -> Result<()> {
        for entry in &self.entries {
            let actual = entry.bytes()?.len() as u64;
            if actual != entry.info.size {
                return Err(Error::SizeMismatch {
                    name: entry.info.name.clone(),
                    declared: entry.info.size,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::Blob;
    use crate::compression::CompressionType;
    use chrono::DateTime;

    fn raw(name: &str, data: &'static [u8]) -> AssetEntry {
        AssetEntry::new(
            Blob::new(CompressionType::None, data),
            AssetInfo::new(
                name,
                data.len() as u64,
                0o644,
                DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            ),
        )
    }

    fn nested() -> Registry {
        Registry::new(vec![
            raw("index.tpl", b"index"),
            raw("mail/welcome.email", b"welcome"),
            raw("mail\\html\\welcome.email", b"<b>welcome</b>"),
        ])
        .unwrap()
    }

    #[test]
    fn embedded_bundle_has_every_view() {
        let registry = Registry::embedded().unwrap();
        assert_eq!(
            registry.names(),
            vec![
                "layout.tpl",
                "layoutEmail.tpl",
                "login.tpl",
                "recover-complete.tpl",
                "recover-html.email",
                "recover-text.email",
                "recover.tpl",
            ]
        );
        registry.verify().unwrap();
    }

    #[test]
    fn backslash_names_are_canonicalized() {
        let registry = nested();
        assert!(registry.contains("mail/html/welcome.email"));
        assert_eq!(
            registry.info("mail/html/welcome.email").unwrap().name,
            "mail/html/welcome.email"
        );
        assert_eq!(
            registry.bytes("mail\\html\\welcome.email").unwrap(),
            registry.bytes("mail/html/welcome.email").unwrap()
        );
    }

    #[test]
    fn directories_are_not_assets() {
        let registry = nested();
        assert!(registry.bytes("mail").unwrap_err().is_not_found());
        assert!(registry.info("mail/html").unwrap_err().is_not_found());
        assert_eq!(registry.list_children("mail").unwrap(), vec!["html", "welcome.email"]);
    }

    #[test]
    fn asset_pairs_bytes_and_info() {
        let registry = nested();
        let asset = registry.asset("mail\\welcome.email").unwrap();
        assert_eq!(asset.bytes, registry.bytes("mail/welcome.email").unwrap());
        assert_eq!(asset.info, registry.info("mail/welcome.email").unwrap());
        assert!(registry.asset("mail/html").unwrap_err().is_not_found());
    }

    #[test]
    fn dot_segments_are_rejected() {
        for name in ["../escaped.tpl", "mail/../../escaped.tpl", "./index.tpl", "mail/./a.tpl"] {
            let err = Registry::new(vec![raw(name, b"x")]).unwrap_err();
            assert!(matches!(err, Error::InvalidBundle(_)), "{} was accepted", name);
        }
        let err = Registry::new(vec![raw("..\\escaped.tpl", b"x")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBundle(_)));
    }

    #[test]
    fn no_dot_segment_resolution() {
        let registry = nested();
        assert!(registry.bytes("./index.tpl").unwrap_err().is_not_found());
        assert!(registry.bytes("mail/../index.tpl").unwrap_err().is_not_found());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Registry::new(vec![raw("a.tpl", b"1"), raw("a.tpl", b"2")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBundle(_)));

        let err = Registry::new(vec![raw("a/b.tpl", b"1"), raw("a\\b.tpl", b"2")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBundle(_)));
    }

    #[test]
    fn verify_reports_size_mismatch() {
        let mut entry = raw("short.tpl", b"abc");
        entry.info.size = 10;
        let registry = Registry::new(vec![entry]).unwrap();
        match registry.verify() {
            Err(Error::SizeMismatch { name, declared, actual }) => {
                assert_eq!(name, "short.tpl");
                assert_eq!(declared, 10);
                assert_eq!(actual, 3);
            }
            other => panic!("expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn metadata_lookup_skips_decompression() {
        let entry = AssetEntry::new(
            Blob::gzip(&b"not gzip at all"[..]),
            AssetInfo::new("broken.tpl", 42, 0o600, DateTime::from_timestamp(0, 0).unwrap()),
        );
        let registry = Registry::new(vec![entry]).unwrap();
        assert_eq!(registry.info("broken.tpl").unwrap().size, 42);
        assert!(matches!(
            registry.bytes("broken.tpl"),
            Err(Error::Decompression { .. })
        ));
    }
}
