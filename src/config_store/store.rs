use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use super::{ConfigError, persistence};
use crate::{
    config::{
        AddressList, Config, ConfigPaths, InterfaceConfig, LogPathsConfig, PreferencesConfig,
        Profile, Setting, SettingValue, WindowConfig,
    },
    keyfile::KeyFile,
    notify::{Notice, Notifier},
};

const NOTICE_TITLE: &str = "Configuration";

/// The configuration of a running MTscan instance.
///
/// Built once at startup with [`ConfigStore::init`], read and modified by
/// the UI through the accessors, and written back with
/// [`ConfigStore::save`]. There is no autosave.
pub struct ConfigStore {
    path: PathBuf,
    document: KeyFile,
    config: Config,
    used_defaults: bool,
    notifier: Box<dyn Notifier>,
}

impl ConfigStore {
    /// Loads the configuration file, falling back to defaults.
    ///
    /// Without `path_override` the file lives in the per-user configuration
    /// directory, which is created if needed. A missing or malformed file is
    /// not an error: the user is notified, every setting takes its default
    /// value, and the defaults are saved right away.
    #[instrument(skip(notifier))]
    pub fn init<N>(path_override: Option<PathBuf>, notifier: N) -> Self
    where
        N: Notifier + 'static,
    {
        let path = path_override.unwrap_or_else(default_config_path);
        let notifier: Box<dyn Notifier> = Box::new(notifier);

        let (mut document, used_defaults) = match persistence::read_document(&path) {
            Ok(document) => {
                info!(path = %path.display(), "Loaded configuration");
                (document, false)
            }
            Err(error) => {
                warn!(%error, "Using default configuration");
                notifier.notify(Notice::info(
                    NOTICE_TITLE,
                    "Unable to read the configuration.\n\nUsing default settings.",
                ));
                (KeyFile::new(), true)
            }
        };

        let config = Config::read_from(&document);
        Config::strip_profiles(&mut document);

        let mut store = Self {
            path,
            document,
            config,
            used_defaults,
            notifier,
        };

        // save() reports failures through the notifier
        if used_defaults && store.save().is_err() {
            debug!("Continuing with unsaved defaults");
        }

        store
    }

    /// Creates a store holding default settings without touching the disk.
    pub fn with_defaults<N>(path: PathBuf, notifier: N) -> Self
    where
        N: Notifier + 'static,
    {
        Self {
            path,
            document: KeyFile::new(),
            config: Config::default(),
            used_defaults: true,
            notifier: Box::new(notifier),
        }
    }

    /// Writes the complete configuration to the configuration file.
    ///
    /// Foreign groups and keys of the loaded file are kept. On failure the
    /// user is notified, the file on disk is left as it was, and the
    /// in-memory settings are unchanged.
    ///
    /// # Errors
    /// * `ConfigError::Serialization` - If the document cannot be rendered
    /// * `ConfigError::Io` - If the file cannot be created or written
    /// * `ConfigError::ShortWrite` - If not all bytes reached the file
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.config.write_to(&mut self.document);

        let result = self
            .document
            .to_data()
            .map_err(|source| ConfigError::Serialization {
                path: self.path.clone(),
                source,
            })
            .and_then(|data| persistence::write_atomic(&self.path, data.as_bytes()));

        match &result {
            Ok(()) => debug!("Saved configuration"),
            Err(save_error) => {
                error!(error = %save_error, "Failed to save configuration");
                self.notifier
                    .notify(Notice::error(NOTICE_TITLE, save_error.to_string()));
            }
        }

        result
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether loading fell back to the default settings.
    pub fn used_defaults(&self) -> bool {
        self.used_defaults
    }

    /// The complete in-memory configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `[window]` settings.
    pub fn window(&self) -> &WindowConfig {
        &self.config.window
    }

    /// Mutable `[window]` settings.
    pub fn window_mut(&mut self) -> &mut WindowConfig {
        &mut self.config.window
    }

    /// Records the window position.
    pub fn set_window_position(&mut self, x: i32, y: i32) {
        self.config.window.x = x;
        self.config.window.y = y;
    }

    /// Records the window size.
    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.config.window.width = width;
        self.config.window.height = height;
    }

    /// Records whether the window is maximized.
    pub fn set_window_maximized(&mut self, maximized: bool) {
        self.config.window.maximized = maximized;
    }

    /// `[interface]` settings.
    pub fn interface(&self) -> &InterfaceConfig {
        &self.config.interface
    }

    /// Mutable `[interface]` settings.
    pub fn interface_mut(&mut self) -> &mut InterfaceConfig {
        &mut self.config.interface
    }

    /// `[path]` settings.
    pub fn log_paths(&self) -> &LogPathsConfig {
        &self.config.log_paths
    }

    /// Mutable `[path]` settings.
    pub fn log_paths_mut(&mut self) -> &mut LogPathsConfig {
        &mut self.config.log_paths
    }

    /// Replaces the directory of the last opened log.
    pub fn set_log_open(&mut self, path: impl Into<String>) {
        self.config.log_paths.log_open = path.into();
    }

    /// Replaces the directory of the last saved log.
    pub fn set_log_save(&mut self, path: impl Into<String>) {
        self.config.log_paths.log_save = path.into();
    }

    /// Replaces the directory of the last exported log.
    pub fn set_log_export(&mut self, path: impl Into<String>) {
        self.config.log_paths.log_export = path.into();
    }

    /// `[preferences]` settings, except the address lists.
    pub fn preferences(&self) -> &PreferencesConfig {
        &self.config.preferences
    }

    /// Mutable `[preferences]` settings.
    pub fn preferences_mut(&mut self) -> &mut PreferencesConfig {
        &mut self.config.preferences
    }

    /// Replaces the gpsd host name.
    pub fn set_gps_hostname(&mut self, hostname: impl Into<String>) {
        self.config.preferences.gps_hostname = hostname.into();
    }

    /// Profiles in display order.
    pub fn profiles(&self) -> &[Profile] {
        &self.config.profiles
    }

    /// Mutable profile collection.
    pub fn profiles_mut(&mut self) -> &mut Vec<Profile> {
        &mut self.config.profiles
    }

    /// Appends a profile and returns its index.
    pub fn add_profile(&mut self, profile: Profile) -> usize {
        self.config.profiles.push(profile);
        self.config.profiles.len() - 1
    }

    /// Removes the profile at `index`, if there is one.
    pub fn remove_profile(&mut self, index: usize) -> Option<Profile> {
        (index < self.config.profiles.len()).then(|| self.config.profiles.remove(index))
    }

    /// The blacklist.
    pub fn blacklist(&self) -> &AddressList {
        &self.config.blacklist
    }

    /// Mutable blacklist.
    pub fn blacklist_mut(&mut self) -> &mut AddressList {
        &mut self.config.blacklist
    }

    /// The highlightlist.
    pub fn highlightlist(&self) -> &AddressList {
        &self.config.highlightlist
    }

    /// Mutable highlightlist.
    pub fn highlightlist_mut(&mut self) -> &mut AddressList {
        &mut self.config.highlightlist
    }

    /// Retrieves a scalar setting by its `section.key` path
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path names no known setting
    pub fn get_by_path(&self, path: &str) -> Result<SettingValue, ConfigError> {
        let setting = lookup(path)?;

        let mut document = KeyFile::new();
        self.config.write_to(&mut document);

        Ok(setting.read(&document)?)
    }

    /// Sets a scalar setting by its `section.key` path from user input.
    ///
    /// Returns the previous value.
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path names no known setting
    /// * `ConfigError::TypeMismatch` - If the input does not parse as the setting's type
    pub fn set_by_path(&mut self, path: &str, input: &str) -> Result<SettingValue, ConfigError> {
        let setting = lookup(path)?;
        let value = setting
            .kind
            .parse(input)
            .ok_or_else(|| ConfigError::TypeMismatch {
                path: path.to_string(),
                expected: setting.kind.name(),
                value: input.to_string(),
            })?;

        let mut document = KeyFile::new();
        self.config.write_to(&mut document);
        let old_value = setting.read(&document)?;

        setting.write(&mut document, &value);
        self.config = Config::read_from(&document);

        debug!(path, %old_value, new_value = %value, "Setting changed");
        Ok(old_value)
    }
}

fn lookup(path: &str) -> Result<&'static Setting, ConfigError> {
    Setting::lookup(path).ok_or_else(|| ConfigError::InvalidPath(path.to_string()))
}

fn default_config_path() -> PathBuf {
    match ConfigPaths::main_config() {
        Ok(path) => {
            if let Some(dir) = path.parent() {
                if let Err(error) = ConfigPaths::ensure_dir(dir) {
                    warn!(%error, dir = %dir.display(), "Failed to create config directory");
                }
            }
            path
        }
        Err(error) => {
            warn!(%error, "No config directory, using the working directory");
            ConfigPaths::fallback_config()
        }
    }
}
