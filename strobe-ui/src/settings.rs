//! Settings store interface
//!
//! Menus read setting values through [`SettingsStore`] to render value rows.
//! Persistence is up to the implementation; [`MemorySettings`] keeps
//! everything in RAM.

use heapless::String;

/// Maximum stored value length in bytes
pub const MAX_VALUE_LEN: usize = 32;

/// Known settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    Ssid,
    Password,
}

impl SettingKey {
    pub const ALL: [SettingKey; 2] = [SettingKey::Ssid, SettingKey::Password];

    /// Storage key name
    pub const fn name(&self) -> &'static str {
        match self {
            SettingKey::Ssid => "ssid",
            SettingKey::Password => "pass",
        }
    }

    /// Secret values are masked when displayed
    pub const fn is_secret(&self) -> bool {
        matches!(self, SettingKey::Password)
    }

    const fn index(&self) -> usize {
        match self {
            SettingKey::Ssid => 0,
            SettingKey::Password => 1,
        }
    }
}

/// Settings errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Value longer than the store can hold
    ValueTooLong,
}

/// Key/value settings access
pub trait SettingsStore {
    /// Current value, `None` if never set
    fn get(&self, key: SettingKey) -> Option<&str>;

    /// Store a value
    fn set(&mut self, key: SettingKey, value: &str) -> Result<(), SettingsError>;
}

/// In-RAM settings
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: [Option<String<MAX_VALUE_LEN>>; 2],
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget a value
    pub fn clear(&mut self, key: SettingKey) {
        self.values[key.index()] = None;
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: SettingKey) -> Option<&str> {
        self.values[key.index()].as_deref()
    }

    fn set(&mut self, key: SettingKey, value: &str) -> Result<(), SettingsError> {
        let value = String::try_from(value).map_err(|_| SettingsError::ValueTooLong)?;
        self.values[key.index()] = Some(value);
        Ok(())
    }
}
