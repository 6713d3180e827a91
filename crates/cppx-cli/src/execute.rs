use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use cppx_split::SplitError;
use walkdir::WalkDir;

use crate::args::{Colors, CppxArgs};
use crate::{diagnostics, Cppx};

impl Cppx {
    /// Run the tool for the given arguments.
    ///
    /// Per-file lexer failures are reported and skipped; only a base
    /// directory that cannot be walked fails the run as a whole.
    pub fn execute(&mut self, args: CppxArgs) -> Result<(), anyhow::Error> {
        self.colors = match args.colors {
            Colors::Auto => atty::is(atty::Stream::Stderr),
            Colors::Always => true,
            Colors::Never => false,
        };

        let base = &args.dir;
        if !base.is_dir() {
            return Err(anyhow!("not a directory: {}", base.display()));
        }

        let files = collect_unified_sources(base);
        if files.is_empty() {
            tracing::warn!(path = ?base, "no unified source files found");
            return Ok(());
        }

        let mut failed = 0_usize;
        for path in &files {
            if let Err(error) = self.split_file(path) {
                tracing::debug!(?path, %error, "skipping file");
                failed += 1;
            }
        }
        if failed > 0 {
            tracing::warn!(
                failed,
                total = files.len(),
                "some files were not split"
            );
        }
        Ok(())
    }

    fn split_file(&self, path: &Path) -> Result<(), anyhow::Error> {
        match path.metadata() {
            Ok(meta) => tracing::info!(?path, size = meta.len(), "processing"),
            Err(error) => tracing::warn!(?path, %error, "could not stat file"),
        }

        let src = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        if src.is_empty() {
            tracing::warn!(?path, "empty unified source file");
        }
        let stem = path
            .file_stem()
            .and_then(OsStr::to_str)
            .context("file name is not valid UTF-8")?;

        let out = match cppx_split::split_to_buffers(&src, stem) {
            Ok(out) => out,
            Err(SplitError::Syntax(error)) => {
                diagnostics::report_lex_error(self.colors, path, &src, &error);
                return Err(error.into());
            }
            Err(SplitError::Io(error)) => return Err(error.into()),
        };

        let header_path = path.with_extension("h");
        let source_path = path.with_extension("cpp");
        fs::write(&header_path, &out.header)
            .with_context(|| format!("failed to write {}", header_path.display()))?;
        fs::write(&source_path, &out.source)
            .with_context(|| format!("failed to write {}", source_path.display()))?;

        println!(
            "{} -> {} + {} ({} bytes in, {} bytes out)",
            path.display(),
            header_path.display(),
            source_path.display(),
            src.len(),
            out.header.len() + out.source.len()
        );
        Ok(())
    }
}

/// Every regular `.cppx` file under `root`, in a stable order.
fn collect_unified_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::error!(%error, "failed to read file system");
                continue;
            }
        };

        if entry.path().extension() != Some(OsStr::new("cppx")) || !entry.file_type().is_file() {
            continue;
        }

        files.push(entry.into_path());
    }
    files.sort();
    files
}
