use clap::ArgMatches;
use tracing::info;

use lifeline_core::SoundBank;

use super::helpers::{assets_dir, game_mode, settings_file};

pub(crate) fn handle_sounds_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mode = game_mode(matches)?;
    let json_output = matches.get_flag("json");
    let settings = settings_file(matches).load().game(mode);
    let root = assets_dir(matches);

    info!(
        event = "cli.sounds_started",
        mode = %mode,
        assets = %root.display(),
        json_output = json_output
    );

    let bank = SoundBank::load(&root, mode, &settings);
    let entries: Vec<_> = bank.entries().collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{} sound theme: {}", mode.display_name(), settings.theme);
        for entry in &entries {
            let marker = if entry.available { "✅" } else { "missing" };
            println!(
                "   {:<12} {:<8} {} ({})",
                entry.effect.key(),
                entry.folder,
                entry.expected_path.display(),
                marker
            );
        }
        println!(
            "{} of {} sound files found under {}",
            bank.available_count(),
            entries.len(),
            root.display()
        );
    }

    info!(
        event = "cli.sounds_completed",
        available = bank.available_count()
    );
    Ok(())
}
