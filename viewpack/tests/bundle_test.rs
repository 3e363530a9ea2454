use std::fs;
use std::sync::Arc;

use viewpack::{restore, Error, Registry};

fn views() -> Registry {
    Registry::embedded().unwrap()
}

#[test]
fn test_declared_size_matches_decompressed_length() {
    let registry = views();
    for name in registry.names() {
        let bytes = registry.bytes(&name).unwrap();
        let info = registry.info(&name).unwrap();
        assert_eq!(info.size, bytes.len() as u64, "size mismatch for {}", name);
        assert_eq!(info.name, name);
    }
}

#[test]
fn test_bytes_are_identical_across_calls() {
    let registry = views();
    let first = registry.bytes("recover.tpl").unwrap();
    let second = registry.bytes("recover.tpl").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_login_and_layout_metadata() {
    let registry = views();
    let names = registry.names();
    assert!(names.contains(&"login.tpl".to_string()));
    assert!(names.contains(&"layout.tpl".to_string()));

    let login = registry.info("login.tpl").unwrap();
    assert_eq!(login.size, 1103);
    assert_eq!(login.mode, 0o666);
    assert_eq!(login.mod_time.timestamp(), 1423332525);
    assert_eq!(registry.info("layout.tpl").unwrap().size, 1603);

    let login = registry.bytes("login.tpl").unwrap();
    assert!(login.starts_with(b"<form action=\"/login\" method=\"POST\">"));
}

#[test]
fn test_email_bodies() {
    let registry = views();
    assert_eq!(
        registry.bytes("recover-html.email").unwrap(),
        b"<strong>{{.Link}}</strong>"
    );
    assert_eq!(registry.bytes("recover-text.email").unwrap(), b"{{.Link}}");
    assert_eq!(
        registry.bytes("layoutEmail.tpl").unwrap(),
        b"<em>{{template \"authboss\" .}}</em>"
    );
}

#[test]
fn test_unknown_asset_is_not_found() {
    match views().bytes("nonexistent/path") {
        Err(Error::NotFound(name)) => assert_eq!(name, "nonexistent/path"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(views().info("nonexistent/path").unwrap_err().is_not_found());
}

#[test]
fn test_asset_is_not_a_directory() {
    let registry = views();
    assert!(registry.list_children("login.tpl").unwrap_err().is_not_a_directory());
    assert!(registry.list_children("missing").unwrap_err().is_not_found());
    assert_eq!(registry.list_children("").unwrap().len(), 7);
}

#[test]
fn test_restore_whole_bundle() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = views();
    restore(&registry, tmp.path(), "").unwrap();

    for name in ["login.tpl", "recover.tpl", "recover-html.email"] {
        let restored = fs::read(tmp.path().join(name)).unwrap();
        assert_eq!(restored, registry.bytes(name).unwrap(), "content of {}", name);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join(name)).unwrap().permissions().mode();
            assert_eq!(mode & 0o7777, registry.info(name).unwrap().mode);
        }
    }
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), registry.len());
}

#[test]
fn test_restore_single_asset_into_missing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("does").join("not").join("exist");
    restore(&views(), &target, "login.tpl").unwrap();

    let entries: Vec<String> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["login.tpl".to_string()]);
    assert_eq!(fs::metadata(target.join("login.tpl")).unwrap().len(), 1103);
}

#[test]
fn test_concurrent_readers_share_one_registry() {
    let registry = Arc::new(views());
    let expected = registry.bytes("layout.tpl").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.bytes("layout.tpl").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
