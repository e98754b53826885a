//! Property tests for manifest ordering.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use embedfs::infrastructure::fs::MemorySourceTree;
use embedfs::{BuildConfig, BundlePipeline};

fn file_set() -> impl Strategy<Value = BTreeSet<String>> {
    let segment = proptest::string::string_regex("[a-e]{1,3}").unwrap();
    let path = proptest::collection::vec(segment, 1..=3).prop_map(|s| s.join("/"));
    proptest::collection::btree_set(path, 1..12)
}

/// Drop paths that would also have to be a directory of another path.
fn leaves_only(paths: BTreeSet<String>) -> Vec<String> {
    paths
        .iter()
        .filter(|p| {
            let dir = format!("{p}/");
            !paths.iter().any(|other| other.starts_with(&dir))
        })
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: File keys, directory keys and child lists are strictly sorted.
    #[test]
    fn property_manifest_is_sorted(
        paths in file_set()
    ) {
        let mut tree = MemorySourceTree::new();
        for path in leaves_only(paths) {
            tree = tree.with_file(format!("root/{path}"), path.as_bytes(), 0);
        }
        let config = BuildConfig {
            files: vec![PathBuf::from("root")],
            prefix: "root".into(),
            ..Default::default()
        };

        let manifest = BundlePipeline::new(config).bundle_from(tree).unwrap();

        let files: Vec<&str> = manifest.files().iter().map(|f| f.key().as_str()).collect();
        prop_assert!(files.windows(2).all(|w| w[0] < w[1]));

        let dirs: Vec<&str> = manifest.directories().iter().map(|d| d.key().as_str()).collect();
        prop_assert!(dirs.windows(2).all(|w| w[0] < w[1]));

        for dir in manifest.directories() {
            let children = dir.child_keys();
            prop_assert!(children.windows(2).all(|w| w[0] < w[1]));
            for child in children {
                prop_assert!(manifest.contains(child.as_str()));
            }
        }
    }
}
