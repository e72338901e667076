//! Device description sent to the browser's emulation layer.

use serde::{Deserialize, Serialize};

/// Viewport and identity of one emulated device.
///
/// Registry entries hand these out by value; the working profile owns its
/// own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name (e.g., "iPhone 8")
    pub name: String,
    /// User agent string
    pub user_agent: String,
    /// Viewport width in CSS pixels
    pub width: u32,
    /// Viewport height in CSS pixels
    pub height: u32,
    /// Device pixel ratio
    pub scale: f64,
    /// Landscape orientation
    pub landscape: bool,
    /// Mobile mode
    pub mobile: bool,
    /// Touch support
    pub touch: bool,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            user_agent: String::new(),
            width: 0,
            height: 0,
            scale: 1.0,
            landscape: false,
            mobile: false,
            touch: false,
        }
    }
}

impl DeviceInfo {
    /// Create a new device with the given name and blank properties
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Set device scale factor
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set landscape orientation
    #[must_use]
    pub const fn with_landscape(mut self, landscape: bool) -> Self {
        self.landscape = landscape;
        self
    }

    /// Set mobile mode
    #[must_use]
    pub const fn with_mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    /// Set touch support
    #[must_use]
    pub const fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// `WIDTHxHEIGHT`
    #[must_use]
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
