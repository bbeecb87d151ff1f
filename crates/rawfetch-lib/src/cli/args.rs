use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        manifest_path: Option<String>,
        output_dir: Option<String>,
        config_path: Option<String>,
        timeout_secs: Option<u64>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "rawfetch",
    version,
    author = "Nick Guletskii",
    about = "Download every image listed in a repository manifest into a local directory"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        value_name = "MANIFEST",
        help = "Manifest listing the images to download [default: data.json]"
    )]
    manifest: Option<String>,

    #[arg(
        value_name = "OUTPUT_DIR",
        help = "Directory the images are saved into [default: images]"
    )]
    output_dir: Option<String>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file with defaults for the manifest, output directory and timeout"
    )]
    config: Option<String>,

    #[arg(
        long = "timeout-secs",
        value_name = "SECONDS",
        help = "Per-request timeout [default: 30]"
    )]
    timeout_secs: Option<u64>,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = Command::Fetch {
        manifest_path: cli.manifest,
        output_dir: cli.output_dir,
        config_path: cli.config,
        timeout_secs: cli.timeout_secs,
    };

    Args { command, log_level }
}
