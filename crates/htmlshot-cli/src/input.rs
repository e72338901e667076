//! Where the HTML comes from.

use crate::error::{CliError, CliResult};
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use url::Url;

/// A page the browser can navigate to.
///
/// When the HTML came from stdin it lives in a temporary file that is
/// removed when this value is dropped.
#[derive(Debug)]
pub struct PageInput {
    url: String,
    // Removed on drop
    _stdin_copy: Option<NamedTempFile>,
}

impl PageInput {
    /// Resolve `-i`: stdin when absent, otherwise a URL or a file path.
    pub fn resolve(arg: Option<&str>) -> CliResult<Self> {
        match arg {
            None => Self::from_reader(&mut io::stdin().lock()),
            Some(arg) => Self::from_arg(arg),
        }
    }

    /// Copy `reader` into a temporary `stdin.*.html` file.
    pub fn from_reader(reader: &mut impl Read) -> CliResult<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("stdin.")
            .suffix(".html")
            .tempfile()?;
        let copied = io::copy(reader, &mut file)?;
        file.flush()?;
        tracing::debug!(bytes = copied, path = %file.path().display(), "stdin buffered");

        Ok(Self {
            url: file_url(file.path())?,
            _stdin_copy: Some(file),
        })
    }

    /// An absolute URL is used as is; anything else must be an existing file.
    pub fn from_arg(arg: &str) -> CliResult<Self> {
        match Url::parse(arg) {
            // Single-letter schemes are Windows drive letters
            Ok(url) if url.scheme().len() > 1 => Ok(Self {
                url: url.into(),
                _stdin_copy: None,
            }),
            _ => {
                let path = Path::new(arg);
                let absolute = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    std::env::current_dir()?.join(path)
                };
                std::fs::metadata(&absolute).map_err(|e| {
                    CliError::invalid_argument(format!("input {}: {e}", absolute.display()))
                })?;
                Ok(Self {
                    url: file_url(&absolute)?,
                    _stdin_copy: None,
                })
            }
        }
    }

    /// URL to navigate to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn file_url(path: &Path) -> CliResult<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| CliError::invalid_argument(format!("not a file path: {}", path.display())))
}
