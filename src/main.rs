use std::io::Write;

use clap::Parser;
use tracing::debug;

use mkube_insight::cli::CliArgs;
use mkube_insight::commands;
use mkube_insight::config::Config;
use mkube_insight::logging;

fn main() {
    let args = CliArgs::parse();

    logging::init_tracing(args.verbose);

    let cfg = Config::resolve(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error loading config: {}", e);
        std::process::exit(1);
    });
    let output = args.output.unwrap_or(cfg.output);
    debug!("running {:?} with {:?} output", args.command, output);

    let result = commands::run(&args.command, &cfg, output).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(result.text.as_bytes()) {
        eprintln!("error writing output: {}", e);
        std::process::exit(1);
    }

    if !result.success {
        std::process::exit(1);
    }
}
