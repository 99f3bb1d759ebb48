//! Version-file parsing and git revision lookup
//!
//! A version file carries `major.minor.patch` on its first line; any further
//! lines are ignored. The parsed components can be augmented with a short
//! commit hash obtained by running git in a caller-supplied directory.

use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

use crate::runner::CommandRunner;
use crate::template;

/// Conventional file name for a project's version file
pub const VERSION_FILE: &str = "VERSION";

/// Module-local result type for version operations
type Result<T> = std::result::Result<T, VersionError>;

/// Errors specific to the version module
#[derive(Debug, Error)]
pub enum VersionError {
    /// The version file does not exist
    #[error("{}", message("File '{0}' not found", .path))]
    NotFound { path: PathBuf },

    /// The first line is not `major.minor.patch`
    #[error("{}", message("Incorrect version format. Must be: 'major.minor.patch'. See file {0}", .path))]
    Format { path: PathBuf },

    /// Reading the file failed after the existence check
    #[error("failed to read version file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn message(tpl: &str, path: &Path) -> String {
    template::render(tpl, &[&path.display()]).unwrap_or_else(|_| path.display().to_string())
}

/// Parsed contents of a version file, plus an optional git revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// The trimmed first line of the version file, e.g. `"1.4.2"`
    pub raw: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Short commit hash, absent when the git lookup fails or is skipped
    pub revision: Option<String>,
}

impl VersionInfo {
    /// Re-assemble the dotted `major.minor.patch` string from the parsed
    /// components. Equals `raw` for any input the parser accepted.
    pub fn to_dotted(&self) -> String {
        template::render("{0}.{1}.{2}", &[&self.major, &self.minor, &self.patch])
            .unwrap_or_else(|_| self.raw.clone())
    }
}

// Three dot-separated decimal fields, nothing else: no leading 'v', no
// pre-release suffix, no surrounding text.
static DOTTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());

/// Read and parse a version file.
///
/// Only the first line is read. The trimmed line must fully match
/// `major.minor.patch` with non-negative integer components.
pub fn read_version<P: AsRef<Path>>(path: P) -> Result<VersionInfo> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(VersionError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| VersionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|source| VersionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let raw = first_line.trim();
    match parse_dotted(raw) {
        Some((major, minor, patch)) => Ok(VersionInfo {
            raw: raw.to_string(),
            major,
            minor,
            patch,
            revision: None,
        }),
        None => Err(VersionError::Format {
            path: path.to_path_buf(),
        }),
    }
}

fn parse_dotted(line: &str) -> Option<(u32, u32, u32)> {
    if !DOTTED.is_match(line) {
        return None;
    }
    // The regex guarantees exactly three decimal fields; parsing only fails
    // on integer overflow, which is rejected as a format problem too.
    let mut parts = line.split('.').map(|part| part.parse::<u32>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch))) => Some((major, minor, patch)),
        _ => None,
    }
}

/// Read a version file and attach the git revision of `work_dir`.
///
/// Revision lookup failure is tolerated: the result simply has no revision.
pub fn read_version_with_revision<P, D>(
    path: P,
    work_dir: D,
    runner: &dyn CommandRunner,
) -> Result<VersionInfo>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let mut info = read_version(path)?;
    let revision = git_revision(work_dir.as_ref(), runner);
    if !revision.is_empty() {
        info.revision = Some(revision);
    }
    Ok(info)
}

/// Read `<source_dir>/VERSION` and attach the revision of `source_dir`.
pub fn read_project_version<D: AsRef<Path>>(
    source_dir: D,
    runner: &dyn CommandRunner,
) -> Result<VersionInfo> {
    let source_dir = source_dir.as_ref();
    read_version_with_revision(source_dir.join(VERSION_FILE), source_dir, runner)
}

/// Look up the short hash of the latest commit in `dir`.
///
/// Returns an empty string when the command exits non-zero or cannot be
/// spawned at all; this is never an error for the caller.
pub fn git_revision(dir: &Path, runner: &dyn CommandRunner) -> String {
    match runner.run("git", &["log", "-1", "--pretty=%h"], dir) {
        Ok(output) if output.status_ok => output
            .stdout
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .to_string(),
        Ok(_) => {
            log::debug!("git revision lookup in '{}' exited non-zero", dir.display());
            String::new()
        }
        Err(err) => {
            log::debug!(
                "git revision lookup in '{}' could not run: {}",
                dir.display(),
                err
            );
            String::new()
        }
    }
}
