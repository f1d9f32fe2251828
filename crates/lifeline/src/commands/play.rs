use std::io::{self, BufRead, Write};
use std::thread;

use clap::ArgMatches;
use tracing::{info, warn};

use lifeline_core::input::{parse_amount, parse_starting_total};
use lifeline_core::sound::{CuePlayer, LoggingCuePlayer, SoundBank, cues_for_event};
use lifeline_core::{
    AnimationPlan, Command, DuelStore, Event, Game, INVALID_PLACEHOLDER, PlayerSlot, Store,
};

use super::helpers::{assets_dir, game_mode, is_confirmation_accepted, settings_file};
use crate::table::TableFormatter;

const HELP: &str = "\
Commands:
  damage|d <player> <amount>    subtract from a player's total
  heal|h <player> <amount>      add to a player's total
  adjust|a <player> <+/-amount> signed change
  halve <player>                halve a player's total
  reset                         reset both players to the starting total
  name <player> <name>          rename a player
  start <total>                 change the starting total (resets both players)
  status|s                      show both totals
  help|?                        show this help
  quit|q                        end the duel";

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SessionOptions {
    pub animate: bool,
    /// Skip the reset confirmation prompt.
    pub assume_yes: bool,
}

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Apply(Command),
    Reset,
    Status,
    Help,
    Quit,
}

pub(crate) fn handle_play_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mode = game_mode(matches)?;
    let options = SessionOptions {
        animate: matches.get_flag("animate"),
        assume_yes: matches.get_flag("yes"),
    };

    let file = settings_file(matches);
    let document = file.load();
    let settings = document.game(mode);

    info!(
        event = "cli.play_started",
        mode = %mode,
        starting_total = settings.starting_lp,
        settings_path = %file.path().display(),
        animate = options.animate
    );

    let bank = SoundBank::load(&assets_dir(matches), mode, &settings);
    let mut cues = LoggingCuePlayer::new(bank, document.global().volume);
    let mut store = DuelStore::with_persistence(Game::from_settings(mode, &settings), file);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut store, &mut cues, stdin.lock(), &mut stdout, options)?;

    info!(
        event = "cli.play_completed",
        player1 = store.game().slot(PlayerSlot::One).total,
        player2 = store.game().slot(PlayerSlot::Two).total
    );
    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
pub(crate) fn run_session<R: BufRead, W: Write>(
    store: &mut DuelStore,
    cues: &mut impl CuePlayer,
    input: R,
    out: &mut W,
    options: SessionOptions,
) -> io::Result<()> {
    writeln!(
        out,
        "{} duel. Type 'help' for commands.",
        store.game().mode().display_name()
    )?;
    write_status(store.game(), out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match parse_line(&line) {
            Ok(action) => action,
            Err(reason) => {
                writeln!(out, "{}", INVALID_PLACEHOLDER)?;
                eprintln!("{}", reason);
                warn!(
                    event = "cli.play_input_rejected",
                    input = %line.trim(),
                    reason = %reason
                );
                continue;
            }
        };

        let command = match action {
            Action::Quit => break,
            Action::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Action::Status => {
                write_status(store.game(), out)?;
                continue;
            }
            Action::Reset => {
                if !options.assume_yes {
                    write!(
                        out,
                        "Reset both players to {}? [y/N] ",
                        store.game().starting_total()
                    )?;
                    out.flush()?;
                    let answer = lines.next().transpose()?.unwrap_or_default();
                    if !is_confirmation_accepted(&answer) {
                        writeln!(out, "Aborted.")?;
                        info!(event = "cli.play_reset_aborted");
                        continue;
                    }
                }
                Command::ResetAll
            }
            Action::Apply(command) => command,
        };

        match store.dispatch(command) {
            Ok(events) => present_events(store, cues, &events, out, options)?,
            Err(e) => {
                writeln!(out, "{}", INVALID_PLACEHOLDER)?;
                eprintln!("{}", e);
            }
        }
    }

    Ok(())
}

fn parse_player(raw: Option<&str>, usage: &str) -> Result<PlayerSlot, String> {
    raw.ok_or_else(|| format!("usage: {}", usage))?
        .parse::<PlayerSlot>()
        .map_err(|e| e.to_string())
}

fn parse_value(raw: Option<&str>, usage: &str) -> Result<i64, String> {
    parse_amount(raw.ok_or_else(|| format!("usage: {}", usage))?).map_err(|e| e.to_string())
}

fn parse_line(line: &str) -> Result<Action, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();

    let action = match verb.as_str() {
        "damage" | "d" => {
            let usage = "damage <player> <amount>";
            let player = parse_player(parts.next(), usage)?;
            let amount = parse_value(parts.next(), usage)?;
            Action::Apply(Command::Damage { player, amount })
        }
        "heal" | "h" => {
            let usage = "heal <player> <amount>";
            let player = parse_player(parts.next(), usage)?;
            let amount = parse_value(parts.next(), usage)?;
            Action::Apply(Command::Heal { player, amount })
        }
        "adjust" | "a" => {
            let usage = "adjust <player> <+/-amount>";
            let player = parse_player(parts.next(), usage)?;
            let delta = parse_value(parts.next(), usage)?;
            Action::Apply(Command::Adjust { player, delta })
        }
        "halve" => {
            let player = parse_player(parts.next(), "halve <player>")?;
            Action::Apply(Command::Halve { player })
        }
        "name" => {
            let player = parse_player(parts.next(), "name <player> <name>")?;
            let name = parts.collect::<Vec<_>>().join(" ");
            return Ok(Action::Apply(Command::RenamePlayer { player, name }));
        }
        "start" => {
            let raw = parts.next().ok_or("usage: start <total>")?;
            let total = parse_starting_total(raw).map_err(|e| e.to_string())?;
            Action::Apply(Command::SetStartingTotal { total })
        }
        "reset" => Action::Reset,
        "status" | "s" => Action::Status,
        "help" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected argument '{}'", extra));
    }
    Ok(action)
}

fn present_events<W: Write>(
    store: &DuelStore,
    cues: &mut impl CuePlayer,
    events: &[Event],
    out: &mut W,
    options: SessionOptions,
) -> io::Result<()> {
    let game = store.game();
    for event in events {
        let effects = cues_for_event(event);
        let plan = options
            .animate
            .then(|| AnimationPlan::for_event(game.mode(), event))
            .flatten();

        match (plan, effects.split_first()) {
            (Some(plan), Some((first, rest))) => {
                cues.play(*first);
                render_animation(game, &plan, out)?;
                cues.play_all(rest);
            }
            (Some(plan), None) => render_animation(game, &plan, out)?,
            (None, _) => cues.play_all(&effects),
        }

        writeln!(out, "{}", describe_event(game, event))?;
    }
    Ok(())
}

/// Blocking frame-by-frame redraw of one player's total on a single line.
fn render_animation<W: Write>(game: &Game, plan: &AnimationPlan, out: &mut W) -> io::Result<()> {
    let name = &game.slot(plan.player).name;
    for (wait, value) in plan.paced() {
        thread::sleep(wait);
        write!(out, "\r{}: {:<8}", name, value)?;
        out.flush()?;
    }
    writeln!(out)
}

fn describe_event(game: &Game, event: &Event) -> String {
    match event {
        Event::LifeChanged { player, old, new } => {
            format!("{}: {} -> {}", game.slot(*player).name, old, new)
        }
        Event::LifeEmptied { player } => {
            format!("{} has no life points left!", game.slot(*player).name)
        }
        Event::LifeReset { total } => format!("Both players reset to {}", total),
        Event::PlayerRenamed { player, name } => format!("Player {} is now {}", player, name),
        Event::StartingTotalChanged { total } => {
            format!("Starting total is now {}; both players reset", total)
        }
    }
}

fn write_status<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TableFormatter::new(game).render(game))
}
