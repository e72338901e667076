//! Device emulation profiles.
//!
//! Built-in presets live in a static [`DeviceRegistry`]. A run keeps one
//! [`DeviceProfile`], seeded from "iPhone 8", which every `--device`
//! argument then refines through the [`DeviceSelector`].

mod device;
mod profile;
mod registry;
mod selector;

pub use device::DeviceInfo;
pub use profile::{DeviceProfile, DeviceProperty, DEFAULT_DEVICE};
pub use registry::{DeviceRegistry, RegistryEntry};
pub use selector::{DeviceSelector, Selection};
