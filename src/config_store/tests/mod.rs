//! Unit tests for config_store module
//! Every test works in its own temporary directory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{cell::RefCell, fs, rc::Rc};

use tempfile::TempDir;

use crate::{
    config::{Profile, SettingValue},
    config_store::{ConfigError, ConfigStore},
    notify::{Notice, Severity},
};

fn recorder() -> (Rc<RefCell<Vec<Notice>>>, impl Fn(Notice) + 'static) {
    let notices = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notices);
    (notices, move |notice: Notice| sink.borrow_mut().push(notice))
}

#[test]
fn missing_file_uses_defaults_and_heals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mtscan.conf");
    let (notices, notifier) = recorder();

    let store = ConfigStore::init(Some(path.clone()), notifier);

    assert!(store.used_defaults());
    assert_eq!(store.window().width, 1000);
    assert!(path.exists());

    let notices = notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Info);
    assert!(notices[0].message.contains("Using default settings"));
}

#[test]
fn malformed_file_is_replaced_by_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mtscan.conf");
    fs::write(&path, "this is not\na key file\n").unwrap();
    let (notices, notifier) = recorder();

    let store = ConfigStore::init(Some(path.clone()), notifier);

    assert!(store.used_defaults());
    assert_eq!(notices.borrow().len(), 1);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[window]"));
}

#[test]
fn valid_file_loads_silently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mtscan.conf");
    fs::write(&path, "[window]\nwidth=800\nheight=oops\n").unwrap();
    let (notices, notifier) = recorder();

    let store = ConfigStore::init(Some(path.clone()), notifier);

    assert!(!store.used_defaults());
    assert!(notices.borrow().is_empty());
    assert_eq!(store.window().width, 800);
    assert_eq!(store.window().height, 500);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[window]\nwidth=800\nheight=oops\n"
    );
}

#[test]
fn accessors_modify_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_defaults(dir.path().join("mtscan.conf"), |_: Notice| {});

    store.set_window_position(10, 20);
    store.set_window_size(640, 480);
    store.set_window_maximized(true);
    store.interface_mut().gps = true;
    store.set_log_export("/tmp/export");
    store.set_gps_hostname(String::from("gps.lan"));
    store.preferences_mut().icon_size = 24;

    assert_eq!(store.window().x, 10);
    assert_eq!(store.window().height, 480);
    assert!(store.window().maximized);
    assert!(store.interface().gps);
    assert_eq!(store.log_paths().log_export, "/tmp/export");
    assert_eq!(store.preferences().gps_hostname, "gps.lan");
    assert_eq!(store.preferences().icon_size, 24);
    assert!(!dir.path().join("mtscan.conf").exists());
}

#[test]
fn profile_collection_editing() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_defaults(dir.path().join("mtscan.conf"), |_: Notice| {});

    assert_eq!(store.add_profile(Profile::named("A")), 0);
    assert_eq!(store.add_profile(Profile::named("B")), 1);
    store.profiles_mut().push(Profile::named("C"));

    assert_eq!(store.remove_profile(1).map(|p| p.name), Some("B".to_string()));
    assert!(store.remove_profile(5).is_none());

    let names: Vec<&str> = store.profiles().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn get_by_path_reads_current_values() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_defaults(dir.path().join("mtscan.conf"), |_: Notice| {});
    store.blacklist_mut().enabled = true;

    assert_eq!(
        store.get_by_path("window.width").unwrap(),
        SettingValue::Integer(1000)
    );
    assert_eq!(
        store.get_by_path("preferences.gps_hostname").unwrap(),
        SettingValue::String("localhost".to_string())
    );
    assert_eq!(
        store.get_by_path("preferences.blacklist_enabled").unwrap(),
        SettingValue::Boolean(true)
    );
    assert!(matches!(
        store.get_by_path("window.depth"),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn set_by_path_updates_typed_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_defaults(dir.path().join("mtscan.conf"), |_: Notice| {});
    store.add_profile(Profile::named("kept"));
    store.highlightlist_mut().add("00:11:22:33:44:55".parse().unwrap());

    let old = store.set_by_path("preferences.gps_tcp_port", "3000").unwrap();
    store.set_by_path("interface.dark_mode", "true").unwrap();
    store.set_by_path("path.log_open", " /data ").unwrap();
    store.set_by_path("preferences.highlightlist_inverted", "1").unwrap();

    assert_eq!(old, SettingValue::Integer(2947));
    assert_eq!(store.preferences().gps_tcp_port, 3000);
    assert!(store.interface().dark_mode);
    assert_eq!(store.log_paths().log_open, " /data ");
    assert!(store.highlightlist().inverted);
    assert_eq!(store.highlightlist().len(), 1);
    assert_eq!(store.profiles()[0].name, "kept");
}

#[test]
fn set_by_path_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_defaults(dir.path().join("mtscan.conf"), |_: Notice| {});

    assert!(matches!(
        store.set_by_path("window.width", "wide"),
        Err(ConfigError::TypeMismatch {
            expected: "integer",
            ..
        })
    ));
    assert!(matches!(
        store.set_by_path("window", "1"),
        Err(ConfigError::InvalidPath(_))
    ));
    assert_eq!(store.window().width, 1000);
}

#[test]
fn failed_save_notifies_and_keeps_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("mtscan.conf");
    let (notices, notifier) = recorder();
    let mut store = ConfigStore::with_defaults(path.clone(), notifier);
    store.set_window_size(1, 2);

    let result = store.save();

    assert!(matches!(result, Err(ConfigError::Io { .. })));
    assert_eq!(store.window().width, 1);
    assert!(!path.exists());

    let notices = notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Error);
    assert_eq!(notices[0].title, "Configuration");
}

#[test]
fn init_survives_unwritable_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("mtscan.conf");
    let (notices, notifier) = recorder();

    let store = ConfigStore::init(Some(path), notifier);

    assert!(store.used_defaults());
    let severities: Vec<Severity> = notices.borrow().iter().map(|n| n.severity).collect();
    assert_eq!(severities, [Severity::Info, Severity::Error]);
}
