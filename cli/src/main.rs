mod commands;
mod terminal;

use commands::{CommandLine, Commands, ScanTuning, interfaces, scan, survey};
use portview_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
    };

    match commands.command {
        // A bare `portview` run surveys the local interfaces end to end.
        None => survey::survey(ScanTuning::default(), &cfg).await,
        Some(Commands::Survey(tuning)) => survey::survey(tuning, &cfg).await,
        Some(Commands::Scan {
            host,
            start_port,
            end_port,
            tuning,
        }) => scan::scan(&host, start_port, end_port, tuning, &cfg).await,
        Some(Commands::Interfaces) => interfaces::interfaces(&cfg),
    }
}
