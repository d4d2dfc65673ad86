//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tablekit";
const APPLICATION: &str = "tablekit";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/tablekit` or `~/.cache/tablekit`
/// - macOS: `~/Library/Caches/dev.tablekit.tablekit`
/// - Windows: `C:\Users\<User>\AppData\Local\tablekit\tablekit\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
