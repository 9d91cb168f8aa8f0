use std::path::{Path, PathBuf};

/// Get home directory or panic with a clear message.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Could not determine home directory")
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    let home = home_dir();
    if let Ok(relative) = path.strip_prefix(&home) {
        format!("~/{}", relative.display())
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_paths_are_shortened() {
        let inside = home_dir().join("Downloads/app.dmg");
        assert_eq!(display_path(&inside), "~/Downloads/app.dmg");
    }

    #[test]
    fn paths_outside_home_are_untouched() {
        assert_eq!(display_path(Path::new("/tmp/app.dmg")), "/tmp/app.dmg");
    }
}
