//! CLI configuration

use crate::commands::Cli;
use htmlshot::{BrowserConfig, ScreenshotMode};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - print the resolved device
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Level from the `-v` count and `-q` flag
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default tracing filter when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Viewport or full-page capture
    pub mode: ScreenshotMode,
    /// Open the written file afterwards
    pub open: bool,
    /// How to reach a browser
    pub browser: BrowserConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut browser = BrowserConfig::default();
        if let Some(ref url) = cli.ws {
            browser = browser.with_ws_url(url);
        }
        if let Some(ref path) = cli.chromium_path {
            browser = browser.with_chromium_path(path);
        }
        if cli.no_sandbox {
            browser = browser.with_no_sandbox();
        }

        let mode = if cli.full {
            ScreenshotMode::FullPage
        } else {
            ScreenshotMode::Viewport
        };

        Self::new()
            .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
            .with_mode(mode)
            .with_open(cli.open)
            .with_browser(browser)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set screenshot mode
    #[must_use]
    pub const fn with_mode(mut self, mode: ScreenshotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether to open the result
    #[must_use]
    pub const fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set browser configuration
    #[must_use]
    pub fn with_browser(mut self, browser: BrowserConfig) -> Self {
        self.browser = browser;
        self
    }
}
