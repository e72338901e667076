//! Result and error types for htmlshot.

use thiserror::Error;

/// Result type for htmlshot operations
pub type ShotResult<T> = Result<T, ShotError>;

/// Errors raised by the browser side of a capture.
///
/// Device selection never fails; only talking to the browser does.
#[derive(Debug, Error)]
pub enum ShotError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunchError {
        /// Error message
        message: String,
    },

    /// Connection to a remote browser failed
    #[error("Failed to connect to browser at {url}: {message}")]
    ConnectionFailed {
        /// Websocket debugger url
        url: String,
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    PageError {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    NavigationError {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Device emulation could not be applied
    #[error("Device emulation failed for {device}: {message}")]
    EmulationError {
        /// Device name
        device: String,
        /// Error message
        message: String,
    },

    /// Screenshot error
    #[error("Screenshot failed: {message}")]
    ScreenshotError {
        /// Error message
        message: String,
    },
}
