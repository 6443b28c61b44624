// Linkshelf platform paths
// Only the config directory is needed; links themselves are never written to disk.
//
// - Linux and other Unix: `$XDG_CONFIG_HOME/linkshelf` or `~/.config/linkshelf`
// - macOS: `~/Library/Application Support/Linkshelf`
// - Windows: `%APPDATA%/Linkshelf`

use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "LINKSHELF_CONFIG";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkshelf")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkshelf")
    }
}

#[cfg(target_os = "macos")]
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Linkshelf")
}

#[cfg(target_os = "windows")]
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Linkshelf")
}

/// Settings file location: `$LINKSHELF_CONFIG` if set, else `settings.json`
/// in the platform config directory.
pub fn default_settings_path() -> PathBuf {
    match env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_config_dir().join("settings.json"),
    }
}
