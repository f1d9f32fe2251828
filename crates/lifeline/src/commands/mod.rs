use clap::ArgMatches;
use tracing::error;

use lifeline_core::events;

pub mod helpers;

mod completions;
mod config;
mod play;
mod sounds;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("play", sub_matches)) => play::handle_play_command(sub_matches),
        Some(("config", sub_matches)) => config::handle_config_command(sub_matches),
        Some(("sounds", sub_matches)) => sounds::handle_sounds_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
