//! Markdown export of finished reports.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;
use tracing::info;

use crate::report::domain::report_file_name;

/// Errors raised while exporting a report.
#[derive(Debug, Error)]
pub enum ReportExportError {
    /// The output directory could not be created or opened.
    #[error("failed to open export directory {path}: {source}")]
    Directory {
        /// Requested directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The report file could not be written.
    #[error("failed to write report {path}: {source}")]
    Write {
        /// Target file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Writes reports into a single output directory.
#[derive(Debug)]
pub struct ReportExporter {
    root: Utf8PathBuf,
    dir: Dir,
}

impl ReportExporter {
    /// Opens `path` for export, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReportExportError::Directory`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> Result<Self, ReportExportError> {
        let root = path.as_ref().to_owned();
        let opened = Dir::create_ambient_dir_all(&root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&root, ambient_authority()));
        match opened {
            Ok(dir) => Ok(Self { root, dir }),
            Err(source) => Err(ReportExportError::Directory { path: root, source }),
        }
    }

    /// Writes `report` as `<project name>-report.md`, replacing any earlier
    /// export, and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`ReportExportError::Write`] when the file cannot be written.
    pub fn export(
        &self,
        project_name: &str,
        report: &str,
    ) -> Result<Utf8PathBuf, ReportExportError> {
        let name = report_file_name(project_name);
        let path = self.root.join(&name);
        if let Err(source) = self.dir.write(&name, report) {
            return Err(ReportExportError::Write { path, source });
        }
        info!(%path, bytes = report.len(), "report exported");
        Ok(path)
    }
}
