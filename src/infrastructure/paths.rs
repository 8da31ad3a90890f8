//! Sandbox path helpers.
//!
//! Inside the Zellij plugin sandbox the host filesystem is reachable under
//! `/host`, so user-facing paths such as `~/themes/dark.toml` have to be
//! rewritten before they can be opened.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace files.
///
/// Resolves to `~/.local/share/zellij/zshort` on the host when Zellij was
/// started from the home directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zshort")
}

/// Maps a leading `~` onto the sandbox's host mount.
///
/// ```
/// use zshort::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/zshort.toml"), "/etc/zshort.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/a"), "relative/a");
    }

    #[test]
    fn data_dir_is_under_host_mount() {
        assert!(data_dir().starts_with("/host"));
        assert!(data_dir().ends_with("zshort"));
    }
}
