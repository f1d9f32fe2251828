use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

const MODES: [&str; 2] = ["yugioh", "mtg"];

fn mode_arg() -> Arg {
    Arg::new("mode")
        .help("Game mode")
        .required(true)
        .value_parser(MODES)
        .index(1)
}

pub fn build_cli() -> Command {
    Command::new("lifeline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Life point counter for two-player card game duels")
        .long_about("Lifeline tracks two players' life totals for Yu-Gi-Oh! (8000 LP, floors at zero) and Magic: The Gathering (20 life, may go negative). Player names, starting totals, sound themes, and appearance are kept in a JSON settings file.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file to use (overrides LIFELINE_CONFIG_FILE)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .help("Asset directory holding sounds/ (overrides LIFELINE_ASSETS_DIR)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("play")
                .about("Start an interactive duel")
                .long_about(
                    "Starts a duel using the mode's saved player names and starting total.\n\n\
                    Commands are read one per line from stdin:\n  \
                    damage|d <player> <amount>   heal|h <player> <amount>\n  \
                    adjust|a <player> <+/-amount>   halve <player>\n  \
                    reset   name <player> <name>   start <total>\n  \
                    status   help   quit"
                )
                .arg(mode_arg())
                .arg(
                    Arg::new("animate")
                        .long("animate")
                        .help("Count life totals up and down instead of jumping")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Reset without asking for confirmation")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("show")
                        .about("Print the current settings")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output the full settings document as JSON")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(Command::new("path").about("Print the settings file location"))
                .subcommand(
                    Command::new("names")
                        .about("Set both player names for a mode")
                        .arg(mode_arg())
                        .arg(Arg::new("player1").help("Player 1 name").required(true).index(2))
                        .arg(Arg::new("player2").help("Player 2 name").required(true).index(3))
                )
                .subcommand(
                    Command::new("starting")
                        .about("Set the starting total for a mode")
                        .arg(mode_arg())
                        .arg(
                            Arg::new("total")
                                .help("Starting total (greater than zero)")
                                .required(true)
                                .allow_negative_numbers(true)
                                .index(2)
                        )
                )
                .subcommand(
                    Command::new("sound-theme")
                        .about("Select the Yu-Gi-Oh! sound theme")
                        .arg(
                            Arg::new("theme")
                                .help("Theme name (Basic, Duel Monsters, GX, 5DS, Zexal, Arc-V, Vrains)")
                                .required(true)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("custom-sound")
                        .about("Pick a sound theme per effect (switches to the Custom theme)")
                        .arg(
                            Arg::new("assignments")
                                .help("EFFECT=THEME pairs, e.g. LP_counting=Zexal")
                                .required(true)
                                .num_args(1..)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("volume")
                        .about("Set the sound volume")
                        .arg(
                            Arg::new("volume")
                                .help("Volume between 0.0 and 1.0")
                                .required(true)
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(f64))
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("appearance")
                        .about("Set light or dark appearance")
                        .arg(
                            Arg::new("appearance")
                                .help("Appearance to use, or toggle to flip dark/light")
                                .required(true)
                                .value_parser(["dark", "light", "system", "toggle"])
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("palette")
                        .about("Select a colour palette")
                        .arg(
                            Arg::new("name")
                                .help("Palette name (Default, Dark Magician, Blue-Eyes)")
                                .required(true)
                                .index(1)
                        )
                )
        )
        .subcommand(
            Command::new("sounds")
                .about("Show which sound file each effect resolves to")
                .arg(mode_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(clap_complete::Shell))
                        .index(1)
                )
        )
}
