mod app;
mod cli;

use clap::Parser;
use cli::{Cli, Command, ProbeArgs, RunArgs};
use hostpulse_core::config::Config;
use hostpulse_core::probe;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Without a subcommand, still honor the env-backed `run` flags (PORT, ...)
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::parse_from(["hostpulse"])));

    match command {
        Command::Run(args) => cmd_run(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let file_config = Config::load(&args.config).ok();
    let _guard = hostpulse_core::lifecycle::logging::init_logging(
        &args.log_level,
        file_config.as_ref().is_some_and(|c| c.logging_to_file),
        file_config.as_ref().and_then(|c| c.log_dir.as_deref()),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let application = app::Application::build(&args)?;
        application.serve().await
    });

    if let Err(ref e) = result {
        tracing::error!("Server exited with error: {e:#}");
    }
    result
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let from_file = Config::load(&args.config).ok().map(|c| c.probe);
    let target = args.resolve(from_file);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(probe::probe(
        &target.url,
        Duration::from_secs(target.timeout_secs),
    ));
    println!("{}: {outcome}", target.url);
    std::process::exit(outcome.exit_code());
}
