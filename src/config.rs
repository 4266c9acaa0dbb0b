// Global configuration for the materials library
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Process-wide defaults for new material collections
pub static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::new()));

/// Default path settings picked up by [`crate::Materials::from_config`].
///
/// `cross_sections` is the path of the cross-section listing file and
/// `multipole_library` the directory holding windowed multipole data. Both
/// end up as top-level elements in `materials.xml` when set.
///
/// A single global instance is exposed via the `CONFIG` static (a
/// `Lazy<Mutex<Config>>`). Obtain a guard with [`Config::global`] rather than
/// locking the mutex directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub cross_sections: Option<String>,
    pub multipole_library: Option<String>,
}

impl Config {
    /// Create a new configuration with nothing set
    pub fn new() -> Self {
        Config {
            cross_sections: None,
            multipole_library: None,
        }
    }

    pub fn set_cross_sections(&mut self, path: impl Into<String>) {
        self.cross_sections = Some(path.into());
    }

    pub fn set_multipole_library(&mut self, path: impl Into<String>) {
        self.multipole_library = Some(path.into());
    }

    /// Clear both paths
    pub fn clear(&mut self) {
        self.cross_sections = None;
        self.multipole_library = None;
    }

    /// Get the global configuration instance
    pub fn global() -> std::sync::MutexGuard<'static, Self> {
        CONFIG
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
