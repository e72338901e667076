//! Where the screenshot goes, and the `--devices` listing.

use crate::error::{CliError, CliResult};
use htmlshot::{format, DeviceInfo, DeviceRegistry};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination of the PNG bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A new `screenshot.*.png` in the temp directory, kept afterwards
    Temporary,
    /// A named file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret `-o`: absent is stdout, `-` is a temporary file.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Stdout,
            Some("-") => Self::Temporary,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }

    /// Refuse to dump binary data on an interactive terminal.
    pub fn check(&self, stdout_is_terminal: bool) -> CliResult<()> {
        if *self == Self::Stdout && stdout_is_terminal {
            return Err(CliError::output(
                "Binary output can mess up your terminal. Please use -o <FILE>.",
            ));
        }
        Ok(())
    }

    /// Write `png`; returns the file path unless it went to stdout.
    pub fn write(&self, png: &[u8]) -> CliResult<Option<PathBuf>> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(png)?;
                stdout.flush()?;
                Ok(None)
            }
            Self::Temporary => {
                let mut file = tempfile::Builder::new()
                    .prefix("screenshot.")
                    .suffix(".png")
                    .tempfile()?;
                file.write_all(png)?;
                let (_, path) = file.keep().map_err(io::Error::from)?;
                Ok(Some(path))
            }
            Self::File(path) => {
                std::fs::write(path, png).map_err(|e| {
                    CliError::output(format!("cannot write {}: {e}", path.display()))
                })?;
                Ok(Some(path.clone()))
            }
        }
    }
}

/// Launch the platform viewer for `path` without waiting for it.
pub fn open_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = std::process::Command::new("xdg-open").arg(path).spawn();

    if let Err(e) = spawned {
        tracing::warn!(path = %path.display(), error = %e, "could not open viewer");
    }
}

/// Format of the `--devices` listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Fixed-width columns
    #[default]
    Text,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct ListedDevice<'a> {
    id: usize,
    #[serde(flatten)]
    device: &'a DeviceInfo,
}

/// Render every preset in `registry`.
pub fn render_device_list(
    registry: &DeviceRegistry,
    list_format: ListFormat,
) -> CliResult<String> {
    match list_format {
        ListFormat::Text => Ok(format::registry_listing(registry)),
        ListFormat::Json => {
            let devices: Vec<ListedDevice<'_>> = registry
                .list_all()
                .iter()
                .map(|entry| ListedDevice {
                    id: entry.id(),
                    device: entry.info(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&devices)?)
        }
    }
}
