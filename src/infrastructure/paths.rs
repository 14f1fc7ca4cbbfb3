//! Host path mapping for the plugin sandbox.
//!
//! Zellij mounts the host directory the session was started from at `/host`.
//! Paths typed by the user (`~/portfolios.json`) are mapped into the sandbox on
//! the way in and mapped back for display.

use std::path::PathBuf;

pub const HOST_ROOT: &str = "/host";

/// Directory holding Folio's trace files: `~/.local/share/zellij/folio` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/folio")
}

/// Maps a leading `~` to the sandbox host root.
///
/// ```
/// use folio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data/catalog.json"), "/host/data/catalog.json");
/// assert_eq!(expand_tilde("/srv/catalog.json"), "/srv/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Inverse of [`expand_tilde`] for display: `/host/x` becomes `~/x`.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a.json"), "/host/a.json");
        assert_eq!(expand_tilde("~alice/a.json"), "~alice/a.json");
        assert_eq!(expand_tilde("relative.json"), "relative.json");
    }

    #[test]
    fn host_prefix_round_trips_for_display() {
        assert_eq!(strip_host_prefix(&expand_tilde("~/x/catalog.json")), "~/x/catalog.json");
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hosted/file"), "/hosted/file");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/folio"));
    }
}
