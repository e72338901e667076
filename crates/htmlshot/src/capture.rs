//! Emulate, navigate, capture.

use crate::browser::{Browser, BrowserConfig, Page, ScreenshotMode};
use crate::emulation::DeviceInfo;
use crate::result::ShotResult;

/// Everything one screenshot needs.
///
/// `device` is a snapshot: the request owns its copy of the profile taken
/// when the request was built.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// Page to load
    pub url: String,
    /// Device to emulate
    pub device: DeviceInfo,
    /// Viewport or full page
    pub mode: ScreenshotMode,
    /// How to reach a browser
    pub browser: BrowserConfig,
}

impl CaptureRequest {
    /// Viewport capture of `url` on `device` in a freshly launched browser
    #[must_use]
    pub fn new(url: impl Into<String>, device: DeviceInfo) -> Self {
        Self {
            url: url.into(),
            device,
            mode: ScreenshotMode::default(),
            browser: BrowserConfig::default(),
        }
    }

    /// Set screenshot mode
    #[must_use]
    pub const fn with_mode(mut self, mode: ScreenshotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set browser configuration
    #[must_use]
    pub fn with_browser(mut self, browser: BrowserConfig) -> Self {
        self.browser = browser;
        self
    }
}

/// Run the capture and return PNG bytes.
///
/// The browser is closed (or detached from) whether or not a step failed;
/// the first failure is returned.
pub async fn capture(request: &CaptureRequest) -> ShotResult<Vec<u8>> {
    let browser = Browser::launch(request.browser.clone()).await?;
    let result = capture_in(&browser, request).await;
    if let Err(e) = browser.close().await {
        tracing::warn!(error = %e, "failed to close browser");
    }
    result
}

async fn capture_in(browser: &Browser, request: &CaptureRequest) -> ShotResult<Vec<u8>> {
    let mut page = browser.new_page().await?;
    let shot = shoot(&mut page, request).await;
    if let Err(e) = page.close().await {
        tracing::debug!(error = %e, "failed to close page");
    }
    shot
}

async fn shoot(page: &mut Page, request: &CaptureRequest) -> ShotResult<Vec<u8>> {
    page.emulate(&request.device).await?;
    tracing::info!(url = %request.url, device = %request.device.name, "navigating");
    page.goto(&request.url).await?;
    let png = page.screenshot(request.mode).await?;
    tracing::info!(
        url = page.current_url(),
        bytes = png.len(),
        mode = ?request.mode,
        "screenshot captured"
    );
    Ok(png)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::emulation::{DeviceProfile, DeviceSelector};

    #[test]
    fn test_request_defaults() {
        let request = CaptureRequest::new("file:///tmp/a.html", DeviceInfo::new("x"));
        assert_eq!(request.url, "file:///tmp/a.html");
        assert_eq!(request.mode, ScreenshotMode::Viewport);
        assert!(request.browser.ws_url.is_none());
    }

    #[test]
    fn test_request_builders() {
        let request = CaptureRequest::new("about:blank", DeviceInfo::new("x"))
            .with_mode(ScreenshotMode::FullPage)
            .with_browser(BrowserConfig::default().with_ws_url("ws://localhost:9222"));
        assert_eq!(request.mode, ScreenshotMode::FullPage);
        assert_eq!(request.browser.ws_url.as_deref(), Some("ws://localhost:9222"));
    }

    #[test]
    fn test_request_holds_snapshot() {
        let selector = DeviceSelector::default();
        let mut profile = DeviceProfile::default();
        let request = CaptureRequest::new("about:blank", profile.snapshot());
        selector.apply(&mut profile, "width=1");
        assert_eq!(request.device.width, 375);
    }

    #[cfg(not(feature = "browser"))]
    mod mock_capture_tests {
        use super::*;

        #[tokio::test]
        async fn test_capture_with_default_profile() {
            let request =
                CaptureRequest::new("https://example.com/", DeviceProfile::default().snapshot());
            let png = capture(&request).await.unwrap();
            assert!(png.is_empty());
        }

        #[tokio::test]
        async fn test_malformed_width_reaches_page_as_zero() {
            let profile = DeviceSelector::default().select_all(["width=abc"]);
            let request = CaptureRequest::new("https://example.com/", profile.snapshot());

            let browser = Browser::launch(request.browser.clone()).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            shoot(&mut page, &request).await.unwrap();
            let device = page.emulated_device().unwrap();
            assert_eq!(device.width, 0);
            assert_eq!(device.height, 667);
            assert_eq!(page.current_url(), "https://example.com/");

            assert!(capture(&request).await.is_ok());
        }
    }
}
