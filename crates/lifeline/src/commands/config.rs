use std::collections::BTreeMap;

use clap::ArgMatches;
use tracing::{error, info};

use lifeline_core::input::parse_starting_total;
use lifeline_core::theme::resolve_palette;
use lifeline_core::{Appearance, GameMode, settings_ops};

use super::helpers::{game_mode, report_failure, settings_file};

pub(crate) fn handle_config_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => handle_show(sub_matches),
        Some(("path", sub_matches)) => {
            println!("{}", settings_file(sub_matches).path().display());
            Ok(())
        }
        Some(("names", sub_matches)) => handle_names(sub_matches),
        Some(("starting", sub_matches)) => handle_starting(sub_matches),
        Some(("sound-theme", sub_matches)) => handle_sound_theme(sub_matches),
        Some(("custom-sound", sub_matches)) => handle_custom_sound(sub_matches),
        Some(("volume", sub_matches)) => handle_volume(sub_matches),
        Some(("appearance", sub_matches)) => handle_appearance(sub_matches),
        Some(("palette", sub_matches)) => handle_palette(sub_matches),
        _ => {
            error!(event = "cli.config.subcommand_unknown");
            Err("Unknown config subcommand".into())
        }
    }
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let file = settings_file(matches);
    let document = file.load();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&document.to_value())?);
        return Ok(());
    }

    let global = document.global();
    let palette = resolve_palette(document.selected_palette());

    println!("Settings: {}", file.path().display());
    println!("   Appearance: {}", global.selected_theme);
    println!("   Volume: {:.2}", global.volume);
    println!("   Palette: {}", palette.name);
    for mode in GameMode::ALL {
        let game = document.game(mode);
        println!("{}:", mode.display_name());
        println!("   Players: {} vs {}", game.player1_name, game.player2_name);
        println!("   Starting total: {}", game.starting_lp);
        println!("   Sound theme: {}", game.theme);
    }

    info!(event = "cli.config.show_completed", path = %file.path().display());
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String, String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| format!("{} argument is required", name))
}

fn handle_names(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mode = game_mode(matches)?;
    let player1 = required(matches, "player1")?;
    let player2 = required(matches, "player2")?;
    let file = settings_file(matches);

    match settings_ops::set_player_names(&file, mode, player1, player2) {
        Ok(settings) => {
            println!(
                "✅ {} players: {} vs {}",
                mode.display_name(),
                settings.player1_name,
                settings.player2_name
            );
            Ok(())
        }
        Err(e) => Err(report_failure("save player names", file.path(), e)),
    }
}

fn handle_starting(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mode = game_mode(matches)?;
    let file = settings_file(matches);
    let total = match parse_starting_total(required(matches, "total")?) {
        Ok(total) => total,
        Err(e) => return Err(report_failure("set starting total", file.path(), e)),
    };

    match settings_ops::set_starting_total(&file, mode, total) {
        Ok(settings) => {
            println!(
                "✅ {} starting total: {}",
                mode.display_name(),
                settings.starting_lp
            );
            Ok(())
        }
        Err(e) => Err(report_failure("set starting total", file.path(), e)),
    }
}

fn handle_sound_theme(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let theme = required(matches, "theme")?;
    let file = settings_file(matches);

    match settings_ops::set_sound_theme(&file, GameMode::YuGiOh, theme) {
        Ok(settings) => {
            println!("✅ Sound theme: {}", settings.theme);
            Ok(())
        }
        Err(e) => Err(report_failure("select sound theme", file.path(), e)),
    }
}

/// Split `EFFECT=THEME` pairs. Later pairs for the same effect win.
fn parse_assignments<'a>(
    raw: impl IntoIterator<Item = &'a String>,
) -> Result<BTreeMap<String, String>, String> {
    raw.into_iter()
        .map(|pair| {
            let (effect, theme) = pair
                .split_once('=')
                .ok_or_else(|| format!("Expected EFFECT=THEME, got '{}'", pair))?;
            let (effect, theme) = (effect.trim(), theme.trim());
            if effect.is_empty() || theme.is_empty() {
                return Err(format!("Expected EFFECT=THEME, got '{}'", pair));
            }
            Ok((effect.to_string(), theme.to_string()))
        })
        .collect()
}

fn handle_custom_sound(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let raw = matches
        .get_many::<String>("assignments")
        .ok_or("assignments argument is required")?;
    let overrides = parse_assignments(raw)?;
    let file = settings_file(matches);

    match settings_ops::set_custom_sound_theme(&file, GameMode::YuGiOh, &overrides) {
        Ok(settings) => {
            println!("✅ Sound theme: {}", settings.theme);
            for (effect, folder) in &settings.sound_paths {
                println!("   {}: {}", effect, folder);
            }
            Ok(())
        }
        Err(e) => Err(report_failure("customize sound theme", file.path(), e)),
    }
}

fn handle_volume(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let volume = *matches
        .get_one::<f64>("volume")
        .ok_or("volume argument is required")?;
    let file = settings_file(matches);

    match settings_ops::set_volume(&file, volume) {
        Ok(global) => {
            println!("✅ Volume: {:.2}", global.volume);
            Ok(())
        }
        Err(e) => Err(report_failure("set volume", file.path(), e)),
    }
}

fn handle_appearance(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let choice = required(matches, "appearance")?;
    let file = settings_file(matches);

    let result = if choice == "toggle" {
        settings_ops::toggle_appearance(&file)
    } else {
        match choice.parse::<Appearance>() {
            Ok(appearance) => settings_ops::set_appearance(&file, appearance),
            Err(e) => Err(e),
        }
    };

    match result {
        Ok(global) => {
            println!("✅ Appearance: {}", global.selected_theme);
            Ok(())
        }
        Err(e) => Err(report_failure("set appearance", file.path(), e)),
    }
}

fn handle_palette(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = required(matches, "name")?;
    let file = settings_file(matches);

    match settings_ops::set_palette(&file, name) {
        Ok(selected) => {
            println!("✅ Palette: {}", selected);
            Ok(())
        }
        Err(e) => Err(report_failure("select palette", file.path(), e)),
    }
}
