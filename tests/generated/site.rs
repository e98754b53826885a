// Code generated by "embedfs --no-compression --modtime 1000 --prefix tests/fixtures/site tests/fixtures/site"; DO NOT EDIT.

//! Embedded assets for module `site`.

use std::sync::{Arc, OnceLock};

use embedfs::runtime::{self, AssetFs, Catalog, FsResult, StaticEntry, StaticManifest};
use embedfs::Encoding;

static MANIFEST: StaticManifest = StaticManifest {
    encoding: Encoding::Identity,
    entries: &[
        StaticEntry::File {
            key: "/docs/guide.txt",
            name: "guide.txt",
            local: "tests/fixtures/site/docs/guide.txt",
            size: 5,
            mod_time: 1000,
            payload: r"
Z3VpZGU=
",
        },
        StaticEntry::File {
            key: "/hello.txt",
            name: "hello.txt",
            local: "tests/fixtures/site/hello.txt",
            size: 5,
            mod_time: 1000,
            payload: r"
aGVsbG8=
",
        },
        StaticEntry::Directory {
            key: "/",
            name: "/",
            local: "tests/fixtures/site",
            children: &[
                "/docs",
                "/hello.txt",
            ],
        },
        StaticEntry::Directory {
            key: "/docs",
            name: "docs",
            local: "tests/fixtures/site/docs",
            children: &[
                "/docs/guide.txt",
            ],
        },
    ],
};

fn catalog() -> &'static Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    CATALOG.get_or_init(|| Arc::new(Catalog::from_static(&MANIFEST)))
}

/// Filesystem over the embedded assets; `use_local` serves the source files.
pub fn fs(use_local: bool) -> AssetFs {
    runtime::open_file_system(use_local, catalog())
}

/// Like `fs`, scoped to the directory `name`.
pub fn dir(use_local: bool, name: &str) -> AssetFs {
    runtime::open_directory(use_local, catalog(), name)
}

/// Content of the asset `name`.
pub fn fs_bytes(use_local: bool, name: &str) -> FsResult<Arc<[u8]>> {
    runtime::read_bytes(use_local, catalog(), name)
}

/// Content of the asset `name` as text.
pub fn fs_string(use_local: bool, name: &str) -> FsResult<String> {
    runtime::read_string(use_local, catalog(), name)
}

/// Same as `fs_bytes`, panicking on error.
pub fn fs_must_bytes(use_local: bool, name: &str) -> Arc<[u8]> {
    runtime::must_read_bytes(use_local, catalog(), name)
}

/// Same as `fs_string`, panicking on error.
pub fn fs_must_string(use_local: bool, name: &str) -> String {
    runtime::must_read_string(use_local, catalog(), name)
}
