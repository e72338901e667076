//! Browser control for headless capture.
//!
//! With the `browser` feature this drives Chromium over the Chrome
//! `DevTools` Protocol through chromiumoxide. Without it, a mock with the
//! same surface records what it was asked to do, for unit testing.

use crate::emulation::DeviceInfo;
use crate::result::ShotResult;

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
    /// `DevTools` websocket of an already running browser; when set,
    /// nothing is launched
    pub ws_url: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chromium_path: None,
            sandbox: true,
            ws_url: None,
        }
    }
}

impl BrowserConfig {
    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Attach to a running browser instead of launching one
    #[must_use]
    pub fn with_ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = Some(url.into());
        self
    }
}

/// What part of the page a screenshot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenshotMode {
    /// The emulated viewport only
    #[default]
    Viewport,
    /// The whole laid-out document
    FullPage,
}

// ============================================================================
// Real CDP Implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserConfig, DeviceInfo, ScreenshotMode, ShotResult};
    use crate::result::ShotError;
    use base64::Engine;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::emulation::{
        ScreenOrientation, ScreenOrientationType, SetDeviceMetricsOverrideParams,
        SetTouchEmulationEnabledParams, SetUserAgentOverrideParams,
    };
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams, GetLayoutMetricsParams,
        Viewport as ClipRect,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;

    /// Browser instance with real CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: CdpBrowser,
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser, or attach to `config.ws_url` when set
        ///
        /// # Errors
        ///
        /// Returns error if browser cannot be launched or reached
        pub async fn launch(config: BrowserConfig) -> ShotResult<Self> {
            let (browser, mut handler) = if let Some(ref url) = config.ws_url {
                tracing::debug!(url = %url, "attaching to running browser");
                CdpBrowser::connect(url.clone()).await.map_err(|e| {
                    ShotError::ConnectionFailed {
                        url: url.clone(),
                        message: e.to_string(),
                    }
                })?
            } else {
                let mut builder = CdpConfig::builder();

                if !config.sandbox {
                    builder = builder.no_sandbox();
                }

                if let Some(ref path) = config.chromium_path {
                    builder = builder.chrome_executable(path);
                }

                let cdp_config = builder
                    .build()
                    .map_err(|message| ShotError::BrowserLaunchError { message })?;

                tracing::debug!(sandbox = config.sandbox, "launching browser");
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| ShotError::BrowserLaunchError {
                        message: e.to_string(),
                    })?
            };

            // Drive CDP events until the connection drops
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: browser,
                handle,
            })
        }

        /// Create a new blank page
        ///
        /// # Errors
        ///
        /// Returns error if page cannot be created
        pub async fn new_page(&self) -> ShotResult<Page> {
            let inner = self
                .inner
                .new_page("about:blank")
                .await
                .map_err(|e| ShotError::PageError {
                    message: e.to_string(),
                })?;

            Ok(Page {
                url: String::from("about:blank"),
                device: None,
                inner,
            })
        }

        /// Shut down a launched browser; a remote one is only detached from
        ///
        /// # Errors
        ///
        /// Returns error if the browser refuses to close
        pub async fn close(mut self) -> ShotResult<()> {
            if self.config.ws_url.is_none() {
                self.inner
                    .close()
                    .await
                    .map_err(|e| ShotError::BrowserLaunchError {
                        message: e.to_string(),
                    })?;
            }
            self.handle.abort();
            Ok(())
        }
    }

    /// A browser page with real CDP connection
    #[derive(Debug)]
    pub struct Page {
        url: String,
        device: Option<DeviceInfo>,
        inner: CdpPage,
    }

    impl Page {
        /// Apply viewport, user agent and touch emulation for `device`.
        ///
        /// The values are copied; later changes to the caller's device do
        /// not reach the page.
        ///
        /// # Errors
        ///
        /// Returns error if any emulation command fails
        pub async fn emulate(&mut self, device: &DeviceInfo) -> ShotResult<()> {
            let orientation = if device.landscape {
                ScreenOrientation::new(ScreenOrientationType::LandscapePrimary, 90)
            } else {
                ScreenOrientation::new(ScreenOrientationType::PortraitPrimary, 0)
            };

            let metrics = SetDeviceMetricsOverrideParams::builder()
                .width(i64::from(device.width))
                .height(i64::from(device.height))
                .device_scale_factor(device.scale)
                .mobile(device.mobile)
                .screen_orientation(orientation)
                .build()
                .map_err(|e| emulation_error(device, e))?;

            self.inner
                .execute(metrics)
                .await
                .map_err(|e| emulation_error(device, e))?;

            self.inner
                .execute(SetUserAgentOverrideParams::new(device.user_agent.clone()))
                .await
                .map_err(|e| emulation_error(device, e))?;

            self.inner
                .execute(SetTouchEmulationEnabledParams::new(device.touch))
                .await
                .map_err(|e| emulation_error(device, e))?;

            tracing::debug!(device = %device.name, "device emulation applied");
            self.device = Some(device.clone());
            Ok(())
        }

        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns error if navigation fails
        pub async fn goto(&mut self, url: &str) -> ShotResult<()> {
            self.inner
                .goto(url)
                .await
                .map_err(|e| ShotError::NavigationError {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            self.url = url.to_string();
            Ok(())
        }

        /// Take a PNG screenshot
        ///
        /// # Errors
        ///
        /// Returns error if screenshot fails
        pub async fn screenshot(&self, mode: ScreenshotMode) -> ShotResult<Vec<u8>> {
            let params = match mode {
                ScreenshotMode::Viewport => CaptureScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
                ScreenshotMode::FullPage => {
                    let metrics = self
                        .inner
                        .execute(GetLayoutMetricsParams::default())
                        .await
                        .map_err(screenshot_error)?;
                    let content = &metrics.css_content_size;

                    let stretch = SetDeviceMetricsOverrideParams::builder()
                        .width(content.width.ceil() as i64)
                        .height(content.height.ceil() as i64)
                        .device_scale_factor(1.0)
                        .mobile(false)
                        .build()
                        .map_err(screenshot_error)?;
                    self.inner
                        .execute(stretch)
                        .await
                        .map_err(screenshot_error)?;

                    CaptureScreenshotParams::builder()
                        .format(CaptureScreenshotFormat::Png)
                        .clip(ClipRect {
                            x: content.x,
                            y: content.y,
                            width: content.width,
                            height: content.height,
                            scale: self.device.as_ref().map_or(1.0, |d| d.scale),
                        })
                        .build()
                }
            };

            let screenshot = self
                .inner
                .execute(params)
                .await
                .map_err(screenshot_error)?;

            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(screenshot_error)
        }

        /// Close the page
        ///
        /// # Errors
        ///
        /// Returns error if the target cannot be closed
        pub async fn close(self) -> ShotResult<()> {
            self.inner.close().await.map_err(|e| ShotError::PageError {
                message: e.to_string(),
            })
        }

        /// Get current URL
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// Device last applied with [`Page::emulate`]
        #[must_use]
        pub const fn emulated_device(&self) -> Option<&DeviceInfo> {
            self.device.as_ref()
        }
    }

    fn emulation_error(device: &DeviceInfo, message: impl ToString) -> ShotError {
        ShotError::EmulationError {
            device: device.name.clone(),
            message: message.to_string(),
        }
    }

    fn screenshot_error(e: impl ToString) -> ShotError {
        ShotError::ScreenshotError {
            message: e.to_string(),
        }
    }
}

// ============================================================================
// Mock Implementation (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
#[allow(clippy::missing_const_for_fn, clippy::unused_async)]
mod mock {
    use super::{BrowserConfig, DeviceInfo, ScreenshotMode, ShotResult};

    /// Browser instance for testing (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Browser;

    impl Browser {
        /// Launch a new browser instance (mock)
        ///
        /// # Errors
        ///
        /// Returns error if browser cannot be launched
        pub async fn launch(_config: BrowserConfig) -> ShotResult<Self> {
            Ok(Self)
        }

        /// Create a new page
        ///
        /// # Errors
        ///
        /// Returns error if page cannot be created
        pub async fn new_page(&self) -> ShotResult<Page> {
            Ok(Page {
                url: String::from("about:blank"),
                device: None,
            })
        }

        /// Close the browser (mock)
        ///
        /// # Errors
        ///
        /// Returns Ok in mock mode
        pub async fn close(self) -> ShotResult<()> {
            Ok(())
        }
    }

    /// A browser page for testing (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Page {
        url: String,
        device: Option<DeviceInfo>,
    }

    impl Page {
        /// Record a copy of `device` as emulated (mock)
        ///
        /// # Errors
        ///
        /// Returns Ok in mock mode
        pub async fn emulate(&mut self, device: &DeviceInfo) -> ShotResult<()> {
            self.device = Some(device.clone());
            Ok(())
        }

        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns error if navigation fails
        pub async fn goto(&mut self, url: &str) -> ShotResult<()> {
            self.url = url.to_string();
            Ok(())
        }

        /// Take a screenshot (mock returns empty)
        ///
        /// # Errors
        ///
        /// Returns empty bytes in mock mode
        pub async fn screenshot(&self, _mode: ScreenshotMode) -> ShotResult<Vec<u8>> {
            Ok(vec![])
        }

        /// Close the page (mock)
        ///
        /// # Errors
        ///
        /// Returns Ok in mock mode
        pub async fn close(self) -> ShotResult<()> {
            Ok(())
        }

        /// Get current URL
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// Device last applied with [`Page::emulate`]
        #[must_use]
        pub const fn emulated_device(&self) -> Option<&DeviceInfo> {
            self.device.as_ref()
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, Page};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BrowserConfig::default();
        assert!(config.sandbox);
        assert!(config.chromium_path.is_none());
        assert!(config.ws_url.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = BrowserConfig::default()
            .with_chromium_path("/usr/bin/chromium")
            .with_no_sandbox()
            .with_ws_url("ws://127.0.0.1:9222/devtools/browser/abc");
        assert!(!config.sandbox);
        assert_eq!(config.chromium_path.as_deref(), Some("/usr/bin/chromium"));
        assert_eq!(
            config.ws_url.as_deref(),
            Some("ws://127.0.0.1:9222/devtools/browser/abc")
        );
    }

    #[test]
    fn test_screenshot_mode_default() {
        assert_eq!(ScreenshotMode::default(), ScreenshotMode::Viewport);
    }

    #[cfg(not(feature = "browser"))]
    mod mock_tests {
        use super::*;

        #[tokio::test]
        async fn test_emulate_records_copy() {
            let browser = Browser::launch(BrowserConfig::default()).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            let mut device = DeviceInfo::new("Phone").with_viewport_size(320, 480);
            page.emulate(&device).await.unwrap();
            device.width = 1;
            assert_eq!(page.emulated_device().unwrap().width, 320);
        }

        #[tokio::test]
        async fn test_emulate_accepts_zero_viewport() {
            let browser = Browser::launch(BrowserConfig::default()).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            page.emulate(&DeviceInfo::new("Blank")).await.unwrap();
            let device = page.emulated_device().unwrap();
            assert_eq!(device.name, "Blank");
            assert_eq!(device.width, 0);
        }

        #[tokio::test]
        async fn test_goto_updates_url() {
            let browser = Browser::launch(BrowserConfig::default()).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            assert_eq!(page.current_url(), "about:blank");
            page.goto("https://example.com/").await.unwrap();
            assert_eq!(page.current_url(), "https://example.com/");
        }
    }
}
