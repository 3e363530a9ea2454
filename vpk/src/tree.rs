use std::io::Write;

use viewpack::Registry;

use crate::error::Result;

/// Prints every asset name in the bundle, one per line.
pub fn list<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    for name in registry.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Prints the children of `path`, marking directories with a trailing `/`.
pub fn show<W: Write>(registry: &Registry, path: &str, out: &mut W) -> Result<()> {
    for child in registry.list_children(path)? {
        let full = viewpack::path::join(path, &child);
        if registry.contains(&full) {
            writeln!(out, "{}", child)?;
        } else {
            writeln!(out, "{}/", child)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_root_of_embedded_bundle() {
        let registry = Registry::embedded().unwrap();
        let mut out = Vec::new();
        show(&registry, "", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|l| l == "login.tpl"));
        assert!(!text.contains('/'));
    }

    #[test]
    fn show_on_an_asset_fails() {
        let registry = Registry::embedded().unwrap();
        let mut out = Vec::new();
        assert!(show(&registry, "login.tpl", &mut out).is_err());
        assert!(out.is_empty());
    }
}
