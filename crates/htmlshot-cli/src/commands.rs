//! CLI command definitions using clap

use clap::{ArgAction, Parser};

/// Render an HTML page in a headless browser and save a screenshot,
/// emulating a mobile device
#[derive(Parser, Debug)]
#[command(name = "htmlshot")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// List all device presets and exit
    #[arg(long)]
    pub devices: bool,

    /// Print the device list as JSON
    #[arg(long, requires = "devices")]
    pub json: bool,

    /// Device number or name from --devices, or custom device properties like:
    /// -d name=string -d useragent=string -d width=int -d height=int
    /// -d scale=float -d landscape=bool -d mobile=bool -d touch=bool
    #[arg(short = 'd', long = "device", value_name = "DEVICE", action = ArgAction::Append)]
    pub device: Vec<String>,

    /// Capture the full web page instead of the viewport
    #[arg(long)]
    pub full: bool,

    /// Input HTML file name or HTTP URL [default: stdin]
    #[arg(short = 'i', long = "input", value_name = "INPUT")]
    pub input: Option<String>,

    /// Output file name [default: stdout], "-" to use a temporary file
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Open the output file when done
    #[arg(long)]
    pub open: bool,

    /// Verbosity level (-v prints the device, -vv adds debug logs)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// WebSocket debugger URL of a running browser
    #[arg(long, env = "HTMLSHOT_WS", value_name = "URL")]
    pub ws: Option<String>,

    /// Path to the Chromium executable
    #[arg(long, env = "CHROMIUM_PATH", value_name = "PATH")]
    pub chromium_path: Option<String>,

    /// Launch the browser without its sandbox (containers/CI)
    #[arg(long)]
    pub no_sandbox: bool,
}
