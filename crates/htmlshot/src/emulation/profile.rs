//! The working device profile of one run.
//!
//! A profile starts from a preset and is then changed either wholesale
//! ([`DeviceProfile::seed`]) or one field at a time
//! ([`DeviceProfile::apply_overrides`]). Malformed values never fail: numbers
//! that do not parse become zero, booleans are true only for the literal
//! `"true"`, and unknown keys are skipped.

use super::device::DeviceInfo;
use super::registry::DeviceRegistry;
use std::fmt;

/// Preset the working profile starts from.
pub const DEFAULT_DEVICE: &str = "iPhone 8";

/// A field of [`DeviceInfo`] addressable by an override key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProperty {
    /// `name`
    Name,
    /// `useragent`
    UserAgent,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `scale`
    Scale,
    /// `landscape`
    Landscape,
    /// `mobile`
    Mobile,
    /// `touch`
    Touch,
}

impl DeviceProperty {
    /// Every recognised property, in display order
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::UserAgent,
        Self::Width,
        Self::Height,
        Self::Scale,
        Self::Landscape,
        Self::Mobile,
        Self::Touch,
    ];

    /// Override key as written on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::UserAgent => "useragent",
            Self::Width => "width",
            Self::Height => "height",
            Self::Scale => "scale",
            Self::Landscape => "landscape",
            Self::Mobile => "mobile",
            Self::Touch => "touch",
        }
    }

    /// Case-insensitive key lookup
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.key().eq_ignore_ascii_case(key))
    }

    /// Write `value` into this field of `info`.
    fn apply(self, info: &mut DeviceInfo, value: &str) {
        match self {
            Self::Name => info.name = value.to_string(),
            Self::UserAgent => info.user_agent = value.to_string(),
            Self::Width => info.width = parse_dimension(value),
            Self::Height => info.height = parse_dimension(value),
            Self::Scale => info.scale = value.parse().unwrap_or(0.0),
            Self::Landscape => info.landscape = parse_flag(value),
            Self::Mobile => info.mobile = parse_flag(value),
            Self::Touch => info.touch = parse_flag(value),
        }
    }
}

impl fmt::Display for DeviceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn parse_dimension(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}

// Exact match only: "True" and "1" are false.
fn parse_flag(value: &str) -> bool {
    value == "true"
}

/// The device configuration selected for the current run.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    info: DeviceInfo,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::from_registry(DeviceRegistry::builtin())
    }
}

impl DeviceProfile {
    /// Profile holding its own copy of `info`
    #[must_use]
    pub fn new(info: DeviceInfo) -> Self {
        Self { info }
    }

    /// Profile seeded from the registry's [`DEFAULT_DEVICE`].
    ///
    /// Falls back to a blank device when the registry does not carry it, so
    /// overrides keep working.
    #[must_use]
    pub fn from_registry(registry: &DeviceRegistry) -> Self {
        match registry.lookup_by_name(DEFAULT_DEVICE) {
            Some(info) => Self::new(info),
            None => {
                tracing::warn!(
                    device = DEFAULT_DEVICE,
                    presets = registry.len(),
                    "default device preset missing, starting from a blank device"
                );
                Self::new(DeviceInfo::default())
            }
        }
    }

    /// Replace every field with a copy of `info`.
    pub fn seed(&mut self, info: &DeviceInfo) {
        self.info.clone_from(info);
    }

    /// Apply `(key, value)` overrides in order.
    ///
    /// Each recognised key updates only its own field. Returns how many
    /// pairs named a recognised property.
    pub fn apply_overrides<I, K, V>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut applied = 0;
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match DeviceProperty::from_key(key) {
                Some(property) => {
                    property.apply(&mut self.info, value);
                    applied += 1;
                }
                None => tracing::debug!(key, "ignoring unknown device property"),
            }
        }
        applied
    }

    /// Independent copy of the current device
    #[must_use]
    pub fn snapshot(&self) -> DeviceInfo {
        self.info.clone()
    }

    /// Read-only view of the current device
    #[must_use]
    pub const fn info(&self) -> &DeviceInfo {
        &self.info
    }
}
