use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log_rank::{config::Config, logging::init_logging, report};
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "log_rank",
    version,
    about = "Count distinct client IPs and rank the busiest IPs and URLs in an access log"
)]
struct Cli {
    /// File to read logs from
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load().with_log_path(cli.file);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = report::run(&config, &mut out) {
        error!("{}", e);
        process::exit(1);
    }
}
