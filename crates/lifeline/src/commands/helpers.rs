use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::error;

use lifeline_core::settings::SettingsFile;
use lifeline_core::sound::assets_root;
use lifeline_core::{GameMode, LifelineError};

/// Settings file from `--config`, falling back to the usual lookup.
pub fn settings_file(matches: &ArgMatches) -> SettingsFile {
    let explicit = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    SettingsFile::resolve(explicit)
}

/// Asset root from `--assets`, falling back to `LIFELINE_ASSETS_DIR` and `./assets`.
pub fn assets_dir(matches: &ArgMatches) -> PathBuf {
    assets_root(matches.get_one::<PathBuf>("assets").map(PathBuf::as_path))
}

/// The positional `mode` argument as a [`GameMode`].
pub fn game_mode(matches: &ArgMatches) -> Result<GameMode, Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("mode")
        .ok_or("Mode argument is required")?;
    Ok(raw.parse::<GameMode>()?)
}

/// Print a failed settings change and hand the error back for the exit code.
pub fn report_failure<E: LifelineError>(
    action: &str,
    path: &Path,
    e: E,
) -> Box<dyn std::error::Error> {
    eprintln!("❌ Failed to {}: {}", action, e);
    error!(
        event = "cli.config.update_failed",
        action = action,
        path = %path.display(),
        error_code = e.error_code(),
        error = %e
    );
    lifeline_core::events::log_app_error(&e);
    e.into()
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmation_accepted_yes() {
        assert!(is_confirmation_accepted("y"));
        assert!(is_confirmation_accepted("Y"));
        assert!(is_confirmation_accepted("yes\n"));
        assert!(is_confirmation_accepted("YES"));
    }

    #[test]
    fn test_is_confirmation_accepted_no() {
        assert!(!is_confirmation_accepted("n"));
        assert!(!is_confirmation_accepted(""));
        assert!(!is_confirmation_accepted("yess"));
        assert!(!is_confirmation_accepted("nope"));
    }

    #[test]
    fn test_settings_file_uses_explicit_config() {
        let matches = crate::app::build_cli()
            .try_get_matches_from(vec!["lifeline", "config", "path", "--config", "/tmp/l.json"])
            .unwrap();
        let path_matches = matches
            .subcommand_matches("config")
            .and_then(|m| m.subcommand_matches("path"))
            .unwrap();
        assert_eq!(
            settings_file(path_matches).path(),
            Path::new("/tmp/l.json")
        );
    }
}
