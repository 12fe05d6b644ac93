use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::playlist::DEFAULT_CAPACITY;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn defaults_match_the_documented_capacity() {
    let settings = Settings::default();
    assert_eq!(settings.playlist.capacity, DEFAULT_CAPACITY);
    assert_eq!(settings.playlist.capacity, 10);
    assert!(settings.validate().is_ok());
}

#[test]
fn playlist_built_from_settings_uses_the_configured_capacity() {
    let settings = Settings {
        playlist: PlaylistSettings { capacity: 3 },
    };
    let list = crate::playlist::Playlist::from_settings(&settings.playlist);
    assert_eq!(list.capacity(), 3);
}

#[test]
fn validate_rejects_zero_capacity() {
    let mut settings = Settings::default();
    settings.playlist.capacity = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_tracklist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", "/tmp/tracklist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/tracklist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playlist]
capacity = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKLIST__PLAYLIST__CAPACITY");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.capacity, 5);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playlist]
capacity = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TRACKLIST__PLAYLIST__CAPACITY", "3");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.capacity, 3);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let _lock = env_lock();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", "/nonexistent/tracklist.toml");
    let _g2 = EnvGuard::remove("TRACKLIST__PLAYLIST__CAPACITY");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.capacity, DEFAULT_CAPACITY);
}
