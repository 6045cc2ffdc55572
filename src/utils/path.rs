//! Executable lookup on a search path
//!
//! Mirrors the UNIX `which` command, expanding `~` in search path entries first.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument, warn};

/// Resolves command names to executables on the search path
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Overrides `$PATH` when set
    search_path: Option<OsString>,
    /// Base for relative search path entries and relative command names
    work_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver; `None` means use `$PATH`
    pub fn new(search_path: Option<OsString>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_path,
            work_dir: work_dir.into(),
        }
    }

    /// The search path with a leading `~` in each entry expanded to the home directory
    pub fn expanded_path(&self) -> OsString {
        let raw = match &self.search_path {
            Some(path) => path.clone(),
            None => env::var_os("PATH").unwrap_or_default(),
        };

        let expanded = env::split_paths(&raw).map(expand_home);
        match env::join_paths(expanded) {
            Ok(joined) => joined,
            Err(e) => {
                warn!("Failed to rebuild expanded search path, using it unexpanded: {}", e);
                raw
            }
        }
    }

    /// Locate the executable for `command`
    #[instrument(skip(self))]
    pub fn which(&self, command: &str) -> Option<PathBuf> {
        let search_path = self.expanded_path();
        if search_path.is_empty() {
            debug!("Search path is empty, nothing to resolve");
            return None;
        }

        match which::which_in(command, Some(&search_path), &self.work_dir) {
            Ok(path) => {
                debug!("Resolved '{}' to {}", command, path.display());
                Some(path)
            }
            Err(e) => {
                debug!("Could not resolve '{}': {}", command, e);
                None
            }
        }
    }

    /// Check if a command exists on the search path
    pub fn command_exists(&self, command: &str) -> bool {
        self.which(command).is_some()
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(None, ".")
    }
}

/// Expands `~` and `~/...` only; `~user/...` entries are kept as written.
fn expand_home(entry: PathBuf) -> PathBuf {
    match entry.to_str() {
        Some(text) => PathBuf::from(shellexpand::tilde(text).into_owned()),
        None => entry,
    }
}

/// Format a lookup result the way the `which` subcommand prints it
pub fn describe_lookup(command: &str, found: Option<&Path>) -> String {
    match found {
        Some(path) => format!("{} = {}", command, path.display()),
        None => format!("{command} = not installed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_which_finds_executable_on_search_path() {
        let temp_dir = TempDir::new().unwrap();
        let expected = make_executable(temp_dir.path(), "flibble-tool");

        let resolver = PathResolver::new(Some(temp_dir.path().into()), temp_dir.path());
        assert_eq!(resolver.which("flibble-tool"), Some(expected));
        assert!(resolver.command_exists("flibble-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_which_skips_non_executable_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("plain"), "data").unwrap();

        let resolver = PathResolver::new(Some(temp_dir.path().into()), temp_dir.path());
        assert_eq!(resolver.which("plain"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_which_uses_first_matching_entry() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = make_executable(first.path(), "dup");
        make_executable(second.path(), "dup");

        let search_path = env::join_paths([first.path(), second.path()]).unwrap();
        let resolver = PathResolver::new(Some(search_path), ".");
        assert_eq!(resolver.which("dup"), Some(expected));
    }

    #[test]
    fn test_which_missing_command() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PathResolver::new(Some(temp_dir.path().into()), temp_dir.path());
        assert_eq!(resolver.which("flibble"), None);
        assert!(!resolver.command_exists("flibble"));
    }

    #[test]
    fn test_empty_search_path_resolves_nothing() {
        let resolver = PathResolver::new(Some(OsString::new()), ".");
        assert_eq!(resolver.which("sh"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_expanded_path_expands_tilde() {
        let resolver = PathResolver::new(Some("~/bin:/usr/bin".into()), ".");
        let home = shellexpand::tilde("~").into_owned();

        assert_eq!(
            resolver.expanded_path(),
            OsString::from(format!("{home}/bin:/usr/bin"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_expanded_path_leaves_other_users_home_unexpanded() {
        let resolver = PathResolver::new(Some("~root/bin:/bin".into()), ".");
        assert_eq!(resolver.expanded_path(), OsString::from("~root/bin:/bin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_expanded_path_keeps_plain_entries() {
        let resolver = PathResolver::new(Some("/usr/local/bin:/bin".into()), ".");
        assert_eq!(resolver.expanded_path(), OsString::from("/usr/local/bin:/bin"));
    }

    #[test]
    fn test_describe_lookup() {
        assert_eq!(
            describe_lookup("touch", Some(Path::new("/usr/bin/touch"))),
            "touch = /usr/bin/touch"
        );
        assert_eq!(describe_lookup("flibble", None), "flibble = not installed");
    }
}
