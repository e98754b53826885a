//! Rust source renderer
//!
//! Emits a module that embeds every payload in a `static` manifest and
//! exposes accessor functions over the runtime filesystem.

use std::fmt::Write;

use crate::domain::entities::{AssetDirectory, AssetFile, Manifest};
use crate::domain::ports::ManifestRenderer;
use crate::domain::value_objects::{Encoding, OutputFormat};
use crate::error::EmbedResult;

/// Renders a manifest as a Rust module.
#[derive(Debug, Clone)]
pub struct RustRenderer {
    module: String,
    invocation: String,
}

impl RustRenderer {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            invocation: String::new(),
        }
    }

    /// Extra command line recorded in the header, e.g. ` --prefix static`.
    pub fn with_invocation(mut self, invocation: Option<&str>) -> Self {
        self.invocation = match invocation {
            Some(args) if !args.is_empty() => format!(" {args}"),
            _ => String::new(),
        };
        self
    }

    fn header(&self, out: &mut String) -> EmbedResult<()> {
        writeln!(
            out,
            "// Code generated by \"embedfs{}\"; DO NOT EDIT.",
            self.invocation
        )?;
        writeln!(out)?;
        writeln!(out, "//! Embedded assets for module `{}`.", self.module)?;
        writeln!(out)?;
        writeln!(out, "use std::sync::{{Arc, OnceLock}};")?;
        writeln!(out)?;
        writeln!(
            out,
            "use embedfs::runtime::{{self, AssetFs, Catalog, FsResult, StaticEntry, StaticManifest}};"
        )?;
        writeln!(out, "use embedfs::Encoding;")?;
        writeln!(out)?;
        Ok(())
    }

    fn manifest(&self, out: &mut String, manifest: &Manifest) -> EmbedResult<()> {
        let encoding = match manifest.encoding() {
            Encoding::Gzip => "Encoding::Gzip",
            Encoding::Identity => "Encoding::Identity",
        };
        writeln!(out, "static MANIFEST: StaticManifest = StaticManifest {{")?;
        writeln!(out, "    encoding: {encoding},")?;
        writeln!(out, "    entries: &[")?;
        for file in manifest.files() {
            self.file(out, file)?;
        }
        for dir in manifest.directories() {
            self.directory(out, dir)?;
        }
        writeln!(out, "    ],")?;
        writeln!(out, "}};")?;
        writeln!(out)?;
        Ok(())
    }

    fn file(&self, out: &mut String, file: &AssetFile) -> EmbedResult<()> {
        writeln!(out, "        StaticEntry::File {{")?;
        writeln!(out, "            key: {:?},", file.key().as_str())?;
        writeln!(out, "            name: {:?},", file.base_name())?;
        writeln!(out, "            local: {:?},", file.local_path())?;
        writeln!(out, "            size: {},", file.size())?;
        writeln!(out, "            mod_time: {},", file.mod_time())?;
        writeln!(out, "            payload: r\"{}\",", file.payload())?;
        writeln!(out, "        }},")?;
        Ok(())
    }

    fn directory(&self, out: &mut String, dir: &AssetDirectory) -> EmbedResult<()> {
        writeln!(out, "        StaticEntry::Directory {{")?;
        writeln!(out, "            key: {:?},", dir.key().as_str())?;
        writeln!(out, "            name: {:?},", dir.base_name())?;
        writeln!(out, "            local: {:?},", dir.local_path())?;
        if dir.child_keys().is_empty() {
            writeln!(out, "            children: &[],")?;
        } else {
            writeln!(out, "            children: &[")?;
            for child in dir.child_keys() {
                writeln!(out, "                {:?},", child.as_str())?;
            }
            writeln!(out, "            ],")?;
        }
        writeln!(out, "        }},")?;
        Ok(())
    }

    fn accessors(&self, out: &mut String, manifest: &Manifest) -> EmbedResult<()> {
        let vis = manifest.naming().visibility();
        out.push_str(
            "fn catalog() -> &'static Arc<Catalog> {\n    \
             static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();\n    \
             CATALOG.get_or_init(|| Arc::new(Catalog::from_static(&MANIFEST)))\n}\n\n",
        );
        writeln!(
            out,
            "/// Filesystem over the embedded assets; `use_local` serves the source files."
        )?;
        writeln!(out, "{vis} fn fs(use_local: bool) -> AssetFs {{")?;
        writeln!(out, "    runtime::open_file_system(use_local, catalog())")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Like `fs`, scoped to the directory `name`.")?;
        writeln!(out, "{vis} fn dir(use_local: bool, name: &str) -> AssetFs {{")?;
        writeln!(out, "    runtime::open_directory(use_local, catalog(), name)")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Content of the asset `name`.")?;
        writeln!(
            out,
            "{vis} fn fs_bytes(use_local: bool, name: &str) -> FsResult<Arc<[u8]>> {{"
        )?;
        writeln!(out, "    runtime::read_bytes(use_local, catalog(), name)")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Content of the asset `name` as text.")?;
        writeln!(
            out,
            "{vis} fn fs_string(use_local: bool, name: &str) -> FsResult<String> {{"
        )?;
        writeln!(out, "    runtime::read_string(use_local, catalog(), name)")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Same as `fs_bytes`, panicking on error.")?;
        writeln!(
            out,
            "{vis} fn fs_must_bytes(use_local: bool, name: &str) -> Arc<[u8]> {{"
        )?;
        writeln!(out, "    runtime::must_read_bytes(use_local, catalog(), name)")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Same as `fs_string`, panicking on error.")?;
        writeln!(
            out,
            "{vis} fn fs_must_string(use_local: bool, name: &str) -> String {{"
        )?;
        writeln!(out, "    runtime::must_read_string(use_local, catalog(), name)")?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl ManifestRenderer for RustRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Rust
    }

    fn render(&self, manifest: &Manifest) -> EmbedResult<String> {
        let mut out = String::new();
        self.header(&mut out)?;
        self.manifest(&mut out, manifest)?;
        self.accessors(&mut out, manifest)?;
        Ok(out)
    }
}
