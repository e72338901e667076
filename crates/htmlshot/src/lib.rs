//! htmlshot: device-emulated screenshots of HTML documents.
//!
//! A run resolves one [`DeviceProfile`] from the built-in
//! [`DeviceRegistry`] and any number of `--device` arguments, then hands a
//! snapshot of it to a headless browser for the capture.
//!
//! ```text
//! --device args ──► DeviceSelector ──► DeviceProfile ──snapshot──► capture()
//!                        │                                           │
//!                  DeviceRegistry                             Browser / Page
//! ```
//!
//! # Example
//!
//! ```
//! use htmlshot::{format, DeviceSelector};
//!
//! let selector = DeviceSelector::default();
//! let profile = selector.select_all(["iPhone 8", "width=400&landscape=true"]);
//! assert_eq!(profile.info().width, 400);
//! assert!(profile.info().landscape);
//! println!("{}", format::multiline_indented(profile.info(), 4));
//! ```

#![warn(missing_docs)]

mod browser;
mod capture;
pub mod emulation;
pub mod format;
mod result;

pub use browser::{Browser, BrowserConfig, Page, ScreenshotMode};
pub use capture::{capture, CaptureRequest};
pub use emulation::{
    DeviceInfo, DeviceProfile, DeviceProperty, DeviceRegistry, DeviceSelector, RegistryEntry,
    Selection, DEFAULT_DEVICE,
};
pub use result::{ShotError, ShotResult};
