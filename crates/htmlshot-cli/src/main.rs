//! htmlshot: screenshot an HTML page as a mobile device would render it
//!
//! ## Usage
//!
//! ```bash
//! htmlshot --devices                          # List device presets
//! htmlshot -i page.html -o shot.png           # Default device (iPhone 8)
//! htmlshot -i https://example.com -d Pixel\ 2 -o -
//! htmlshot -d "iPhone 8" -d landscape=true -o shot.png < page.html
//! ```

use clap::Parser;
use htmlshot::{capture, format, CaptureRequest, DeviceRegistry, DeviceSelector};
use htmlshot_cli::{
    init_tracing, open_viewer, render_device_list, Cli, CliConfig, CliError, CliResult,
    ListFormat, OutputTarget, PageInput,
};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    init_tracing(config.verbosity);

    let registry = DeviceRegistry::builtin();
    if registry.is_empty() {
        return Err(CliError::config("no device presets available"));
    }

    if cli.devices {
        let list_format = if cli.json {
            ListFormat::Json
        } else {
            ListFormat::Text
        };
        println!("{}", render_device_list(registry, list_format)?);
        return Ok(());
    }

    let profile = DeviceSelector::new(registry).select_all(&cli.device);
    if config.verbosity.is_verbose() {
        eprintln!("Device:");
        eprintln!("{}", format::multiline_indented(profile.info(), 4));
    }

    let target = OutputTarget::from_arg(cli.output.as_deref());
    target.check(std::io::stdout().is_terminal())?;

    let input = PageInput::resolve(cli.input.as_deref())?;
    if let Some(ref url) = config.browser.ws_url {
        tracing::info!(url = %url, "using remote browser");
    }

    let request = CaptureRequest::new(input.url(), profile.snapshot())
        .with_mode(config.mode)
        .with_browser(config.browser.clone());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::config(format!("Failed to create runtime: {e}")))?;
    let png = rt.block_on(capture(&request))?;

    if let Some(path) = target.write(&png)? {
        println!("{}", path.display());
        if config.open {
            open_viewer(&path);
        }
    }
    Ok(())
}
