use rawfetch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    let summary = match command {
        ResolvedCommand::Fetch(params) => run_fetch(params, std::io::stdout()).await?,
    };

    Ok(if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
