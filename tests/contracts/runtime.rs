//! Runtime filesystem contracts (VFS-001 through VFS-004)
//!
//! These contracts ensure the embedded filesystem serves exactly what was
//! bundled, decodes each asset once, and reports failures consistently.

use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

use embedfs::infrastructure::fs::MemorySourceTree;
use embedfs::runtime::{open_file_system, Catalog, FsError};
use embedfs::{
    canonicalize, AssetFile, BuildConfig, BundlePipeline, Encoding, FunctionNaming, Manifest,
};

fn site() -> Manifest {
    let tree = MemorySourceTree::new()
        .with_file("site/index.html", b"<h1>home</h1>", 10)
        .with_file("site/css/a.css", b"a{}", 20)
        .with_file("site/css/b.css", b"b{}", 30)
        .with_file("site/css/c.css", b"c{}", 40)
        .with_dir("site/empty");
    let config = BuildConfig {
        files: vec![PathBuf::from("site")],
        prefix: "site".into(),
        ..Default::default()
    };
    BundlePipeline::new(config).bundle_from(tree).unwrap()
}

/// CONTRACT VFS-001: read_dir count semantics
mod read_dir {
    use super::*;

    #[test]
    fn contract_non_positive_count_returns_all() {
        let fs = open_file_system(false, &Arc::new(Catalog::new(&site())));
        let css = fs.open("/css").unwrap();

        assert_eq!(css.read_dir(0).unwrap().len(), 3);
        assert_eq!(css.read_dir(-7).unwrap().len(), 3);
    }

    #[test]
    fn contract_positive_count_returns_exactly_k() {
        let fs = open_file_system(false, &Arc::new(Catalog::new(&site())));
        let css = fs.open("/css").unwrap();

        let names: Vec<String> = css
            .read_dir(2)
            .unwrap()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, ["a.css", "b.css"]);
    }

    #[test]
    fn contract_empty_directory_signals_end() {
        let fs = open_file_system(false, &Arc::new(Catalog::new(&site())));
        let empty = fs.open("/empty").unwrap();
        assert!(matches!(empty.read_dir(1), Err(FsError::EndOfDirectory)));
    }

    #[test]
    fn contract_file_is_not_a_directory() {
        let fs = open_file_system(false, &Arc::new(Catalog::new(&site())));
        let file = fs.open("/index.html").unwrap();
        assert!(matches!(file.read_dir(0), Err(FsError::NotADirectory(_))));
    }
}

/// CONTRACT VFS-002: Content is decoded exactly once
mod decode_once {
    use super::*;

    #[test]
    fn contract_concurrent_first_reads_decode_once() {
        let catalog = Arc::new(Catalog::new(&site()));
        let fs = open_file_system(false, &catalog);
        let barrier = Barrier::new(16);

        let contents: Vec<Vec<u8>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        let mut handle = fs.open("/index.html").unwrap();
                        let mut buf = Vec::new();
                        handle.read_to_end(&mut buf).unwrap();
                        buf
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(contents.iter().all(|c| c == b"<h1>home</h1>"));
        assert_eq!(catalog.get("/index.html").unwrap().decode_count(), 1);
    }

    #[test]
    fn contract_stat_does_not_decode() {
        let catalog = Arc::new(Catalog::new(&site()));
        let fs = open_file_system(false, &catalog);

        let meta = fs.open("/css/a.css").unwrap().stat().unwrap();
        let listing = fs.open("/css").unwrap().read_dir(0).unwrap();

        assert_eq!(meta.len(), 3);
        assert_eq!(meta.mod_time(), 20);
        assert_eq!(listing.len(), 3);
        assert_eq!(catalog.get("/css/a.css").unwrap().decode_count(), 0);
    }
}

/// CONTRACT VFS-003: A decode failure is the same on every retry
mod decode_failure {
    use super::*;
    use embedfs::domain::services::ManifestBuilder;

    fn broken() -> Arc<Catalog> {
        let truncated = AssetFile::new(
            canonicalize("/broken.bin", ""),
            "site/broken.bin",
            100,
            0,
            "\nH4sIAAAAAAAA\n",
        );
        let manifest = ManifestBuilder::new(Encoding::Gzip, FunctionNaming::Public)
            .build(vec![truncated], vec![])
            .unwrap();
        Arc::new(Catalog::new(&manifest))
    }

    #[test]
    fn contract_failure_is_cached_and_repeated() {
        let catalog = broken();
        let fs = open_file_system(false, &catalog);

        let errors: Vec<String> = (0..3)
            .map(|_| fs.read("/broken.bin").unwrap_err().to_string())
            .collect();

        assert!(errors.iter().all(|e| e == &errors[0]));
        assert!(errors[0].starts_with("/broken.bin: "));
        assert_eq!(catalog.get("/broken.bin").unwrap().decode_count(), 1);
    }

    #[test]
    fn contract_failure_never_looks_like_empty_content() {
        let catalog = broken();
        let fs = open_file_system(false, &catalog);
        let barrier = Barrier::new(8);

        let outcomes: Vec<bool> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        matches!(fs.read("/broken.bin"), Err(FsError::Decode { .. }))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(outcomes.iter().all(|failed| *failed));
    }
}

/// CONTRACT VFS-004: Unknown names are not found in both modes
mod not_found {
    use super::*;

    #[test]
    fn contract_unknown_name_is_not_found() {
        let catalog = Arc::new(Catalog::new(&site()));
        for use_local in [false, true] {
            let err = open_file_system(use_local, &catalog)
                .open("/nope.html")
                .unwrap_err();
            assert!(err.is_not_found());
            let io: std::io::Error = err.into();
            assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        }
    }
}
