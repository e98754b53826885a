//! Bundling contracts (BUNDLE-001 through BUNDLE-006)
//!
//! These contracts pin down which paths end up in a manifest, under which
//! keys, and what their payloads decode to.

use std::path::PathBuf;

use embedfs::infrastructure::fs::MemorySourceTree;
use embedfs::{codec, BuildConfig, BundlePipeline, EmbedError, Encoding, Manifest, ManifestEntry};

use crate::common::*;

fn assets_tree() -> MemorySourceTree {
    MemorySourceTree::new()
        .with_file("assets/a.txt", b"hello", 1_600_000_000)
        .with_file("assets/sub/b.txt", b"world", 1_600_000_500)
}

fn assets_config() -> BuildConfig {
    BuildConfig {
        files: vec![PathBuf::from("assets")],
        prefix: "assets".into(),
        ..Default::default()
    }
}

fn file_keys(manifest: &Manifest) -> Vec<&str> {
    manifest.files().iter().map(|f| f.key().as_str()).collect()
}

fn dir_keys(manifest: &Manifest) -> Vec<&str> {
    manifest.directories().iter().map(|d| d.key().as_str()).collect()
}

fn children<'a>(manifest: &'a Manifest, key: &str) -> Vec<&'a str> {
    match manifest.get(key) {
        Some(ManifestEntry::Directory(dir)) => dir.child_keys().iter().map(|k| k.as_str()).collect(),
        other => panic!("{key} is not a directory: {other:?}"),
    }
}

/// CONTRACT BUNDLE-001: Keys are prefix-stripped and rooted at `/`
mod keys {
    use super::*;

    #[test]
    fn contract_files_and_directories_under_prefix() {
        let manifest = BundlePipeline::new(assets_config())
            .bundle_from(assets_tree())
            .unwrap();

        assert_eq!(file_keys(&manifest), ["/a.txt", "/sub/b.txt"]);
        assert_eq!(dir_keys(&manifest), ["/", "/sub"]);
        assert_eq!(children(&manifest, "/sub"), ["/sub/b.txt"]);
        assert_eq!(children(&manifest, "/"), ["/a.txt", "/sub"]);
    }

    #[test]
    fn contract_duplicate_key_is_rejected() {
        let config = BuildConfig {
            files: vec![PathBuf::from("assets/a.txt"), PathBuf::from("assets/./a.txt")],
            ..assets_config()
        };

        let err = BundlePipeline::new(config)
            .bundle_from(assets_tree())
            .unwrap_err();

        assert!(
            matches!(err, EmbedError::DuplicateKey { ref key, .. } if key == "/a.txt"),
            "unexpected error: {err}"
        );
    }
}

/// CONTRACT BUNDLE-002: Ignored paths are never read and never listed
mod ignore {
    use super::*;

    #[test]
    fn contract_ignored_file_is_absent_and_unread() {
        let tree = assets_tree().with_file("assets/.DS_Store", DS_STORE.as_bytes(), 0);
        let config = BuildConfig {
            ignore: Some(IGNORE_DS_STORE.into()),
            ..assets_config()
        };

        let with_ignore = BundlePipeline::new(config).bundle_from(&tree).unwrap();
        let baseline = BundlePipeline::new(assets_config())
            .bundle_from(assets_tree())
            .unwrap();

        assert_eq!(with_ignore, baseline);
        assert_eq!(tree.reads_of("assets/.DS_Store"), 0);
    }

    #[test]
    fn contract_ignored_directory_is_not_descended() {
        let tree = assets_tree().with_file("assets/node_modules/x.js", b"x", 0);
        let config = BuildConfig {
            ignore: Some("node_modules".into()),
            ..assets_config()
        };

        let manifest = BundlePipeline::new(config).bundle_from(&tree).unwrap();

        assert!(!manifest.contains("/node_modules"));
        assert!(!children(&manifest, "/").contains(&"/node_modules"));
        assert_eq!(tree.lists_of("assets/node_modules"), 0);
    }
}

/// CONTRACT BUNDLE-003: Include restricts files but keeps their directories
mod include {
    use super::*;

    #[test]
    fn contract_non_matching_file_is_dropped_from_files_and_listing() {
        let tree = assets_tree().with_file("assets/readme.md", b"# readme", 0);
        let config = BuildConfig {
            include: Some(r"\.txt$".into()),
            ..assets_config()
        };

        let manifest = BundlePipeline::new(config).bundle_from(tree).unwrap();

        assert!(!manifest.contains("/readme.md"));
        assert!(!children(&manifest, "/").contains(&"/readme.md"));
        assert!(dir_keys(&manifest).contains(&"/"));
    }
}

/// CONTRACT BUNDLE-004: The modification time override wins
mod mod_time {
    use super::*;
    use embedfs::config::ModTimeSetting;

    #[test]
    fn contract_override_applies_to_every_file() {
        let config = BuildConfig {
            modtime: Some(ModTimeSetting::Seconds(1000)),
            ..assets_config()
        };

        let manifest = BundlePipeline::new(config)
            .bundle_from(assets_tree())
            .unwrap();

        assert!(!manifest.is_empty());
        assert!(manifest.files().iter().all(|f| f.mod_time() == 1000));
    }

    #[test]
    fn contract_real_timestamps_without_override() {
        let manifest = BundlePipeline::new(assets_config())
            .bundle_from(assets_tree())
            .unwrap();
        let times: Vec<i64> = manifest.files().iter().map(|f| f.mod_time()).collect();
        assert_eq!(times, [1_600_000_000, 1_600_000_500]);
    }
}

/// CONTRACT BUNDLE-005: Identity payloads are plain base64
mod identity {
    use super::*;

    #[test]
    fn contract_identity_payload_decodes_without_gunzip() {
        let config = BuildConfig {
            no_compression: true,
            ..assets_config()
        };
        let manifest = BundlePipeline::new(config)
            .bundle_from(assets_tree())
            .unwrap();

        assert_eq!(manifest.encoding(), Encoding::Identity);
        let Some(ManifestEntry::File(file)) = manifest.get("/a.txt") else {
            panic!("missing /a.txt");
        };
        assert_eq!(file.payload(), "\naGVsbG8=\n");
        assert_eq!(codec::decode(file.payload(), Encoding::Identity).unwrap(), b"hello");
    }
}

/// CONTRACT BUNDLE-006: Bundling from disk matches the in-memory tree
mod disk {
    use super::*;

    #[test]
    fn contract_disk_walk_matches_scenario() {
        let env = TestEnv::builder()
            .with_file("assets/a.txt", "hello")
            .with_file("assets/sub/b.txt", "world")
            .build();
        let root = env.project_path("assets");
        let config = BuildConfig {
            files: vec![root.clone()],
            prefix: root.to_string_lossy().into_owned(),
            ..Default::default()
        };

        let manifest = BundlePipeline::new(config).bundle().unwrap();

        assert_eq!(file_keys(&manifest), ["/a.txt", "/sub/b.txt"]);
        assert_eq!(children(&manifest, "/sub"), ["/sub/b.txt"]);
    }
}
