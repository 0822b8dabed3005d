use std::path::{Path, PathBuf};

/// Expand a leading tilde (`~` or `~/path`) to the current user's home
/// directory. Paths without a leading tilde pass through unchanged.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    if !path_str.starts_with('~') {
        return Some(path.to_path_buf());
    }

    let after_tilde = &path_str[1..];
    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(PathBuf::from(home).join(after_tilde.trim_start_matches('/')));
    }

    // ~username is not supported
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_current_user() {
        let home = env::var("HOME").unwrap();

        let expanded = expand_tilde("~").unwrap();
        assert_eq!(expanded, PathBuf::from(&home));

        let expanded = expand_tilde("~/.mcpcast.toml").unwrap();
        assert_eq!(expanded, PathBuf::from(format!("{}/.mcpcast.toml", home)));
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        let expanded = expand_tilde("/absolute/path").unwrap();
        assert_eq!(expanded, PathBuf::from("/absolute/path"));

        let expanded = expand_tilde(".mcp.json").unwrap();
        assert_eq!(expanded, PathBuf::from(".mcp.json"));
    }

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_no_home_env() {
        let original_home = env::var("HOME").ok();
        env::remove_var("HOME");

        let expanded = expand_tilde("~/file");
        assert!(expanded.is_none());

        if let Some(home) = original_home {
            env::set_var("HOME", home);
        }
    }

    #[test]
    fn test_tilde_mid_path_is_literal() {
        let expanded = expand_tilde("/path/~user/file").unwrap();
        assert_eq!(expanded, PathBuf::from("/path/~user/file"));
    }
}
