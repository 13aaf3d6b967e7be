//! Launch-at-login registration through an XDG autostart desktop entry.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use xdg::BaseDirectories;

const DESKTOP_FILE_NAME: &str = concat!(env!("CARGO_PKG_NAME"), ".desktop");

#[derive(Error, Debug)]
pub enum AutostartError {
    #[error("Unable to determine the XDG config directory")]
    NoConfigHome,

    #[error("Unable to determine the current executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("Failed to update {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `$XDG_CONFIG_HOME/autostart`
pub fn autostart_dir() -> Option<PathBuf> {
    BaseDirectories::new()
        .get_config_home()
        .map(|home| home.join("autostart"))
}

/// Contents of the desktop entry launching `exe`
pub fn desktop_entry(exe: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=yearcal\n\
         Comment=Year calendar with the day's events\n\
         Exec={}\n\
         Terminal=true\n\
         X-GNOME-Autostart-enabled=true\n",
        exe.display()
    )
}

/// Write or remove the desktop entry under `dir`
pub fn set_enabled_in(dir: &Path, exe: &Path, enabled: bool) -> Result<(), AutostartError> {
    let path = dir.join(DESKTOP_FILE_NAME);
    let io_err = |source| AutostartError::Io {
        path: path.clone(),
        source,
    };

    if enabled {
        fs::create_dir_all(dir).map_err(io_err)?;
        fs::write(&path, desktop_entry(exe)).map_err(io_err)?;
        info!("AUTOSTART: registered {}", path.display());
    } else {
        match fs::remove_file(&path) {
            Ok(()) => info!("AUTOSTART: removed {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("AUTOSTART: {} already absent", path.display());
            }
            Err(e) => return Err(io_err(e)),
        }
    }
    Ok(())
}

/// Register or unregister this executable to launch at login
pub fn set_enabled(enabled: bool) -> Result<(), AutostartError> {
    let dir = autostart_dir().ok_or(AutostartError::NoConfigHome)?;
    let exe = std::env::current_exe().map_err(AutostartError::CurrentExe)?;
    set_enabled_in(&dir, &exe, enabled)
}

/// Whether a desktop entry exists under `dir`
pub fn is_enabled_in(dir: &Path) -> bool {
    dir.join(DESKTOP_FILE_NAME).exists()
}

/// Whether this program is registered to launch at login
pub fn is_enabled() -> bool {
    autostart_dir().is_some_and(|dir| is_enabled_in(&dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_entry_points_at_exe() {
        let entry = desktop_entry(Path::new("/usr/local/bin/yearcal"));
        assert!(entry.starts_with("[Desktop Entry]\n"));
        assert!(entry.contains("Exec=/usr/local/bin/yearcal\n"));
        assert!(entry.contains("Terminal=true\n"));
        assert!(entry.contains("Type=Application\n"));
    }

    #[test]
    fn test_enable_then_disable() {
        let dir = tempfile::tempdir().unwrap();
        let autostart = dir.path().join("autostart");
        let exe = Path::new("/opt/yearcal");

        set_enabled_in(&autostart, exe, true).unwrap();
        assert!(is_enabled_in(&autostart));
        let content = fs::read_to_string(autostart.join("yearcal.desktop")).unwrap();
        assert!(content.contains("Exec=/opt/yearcal\n"));

        set_enabled_in(&autostart, exe, false).unwrap();
        assert!(!is_enabled_in(&autostart));
    }

    #[test]
    fn test_disable_when_absent_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(set_enabled_in(dir.path(), Path::new("/opt/yearcal"), false).is_ok());
    }
}
