use clap::{Parser, Subcommand};
use plantbook::model::PlantId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plantbook", version)]
#[command(about = "Keep a catalog of the plants you own", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to $PLANTBOOK_HOME, then the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "plantbook",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List all plants
    #[command(alias = "ls")]
    List,

    /// Start adding a new plant
    #[command(alias = "new")]
    Add,

    /// Open a plant's detail screen
    #[command(alias = "view")]
    Open {
        /// Id of the plant (as shown by `list`)
        id: PlantId,
    },

    /// Show the open screen again
    Show,

    /// Edit the open plant
    #[command(alias = "e")]
    Edit,

    /// Set the draft name
    Name {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the draft notes (no text clears them)
    Notes {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Pick a photo file for the draft
    Photo {
        /// Image file to use
        #[arg(required_unless_present = "clear")]
        path: Option<PathBuf>,

        /// Remove the draft photo
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },

    /// Save the draft
    #[command(alias = "s")]
    Save,

    /// Throw the draft away
    Cancel,

    /// Close the open screen and return to the list
    Back,

    /// Get or set configuration
    Config {
        /// Configuration key (date-format, placeholder, photo-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show available commands
    Help,

    /// Leave plantbook
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionLine::try_parse_from(line.split_whitespace())
            .unwrap()
            .command
    }

    #[test]
    fn parses_open_with_id() {
        assert!(matches!(parse("open 3"), SessionCommand::Open { id: PlantId(3) }));
        assert!(matches!(parse("view 1"), SessionCommand::Open { id: PlantId(1) }));
    }

    #[test]
    fn name_collects_all_words() {
        match parse("name Ficus Lyrata") {
            SessionCommand::Name { words } => assert_eq!(words, vec!["Ficus", "Lyrata"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn name_without_words_is_allowed() {
        assert!(matches!(parse("name"), SessionCommand::Name { words } if words.is_empty()));
    }

    #[test]
    fn photo_requires_path_or_clear() {
        assert!(SessionLine::try_parse_from(["photo"]).is_err());
        assert!(matches!(
            parse("photo --clear"),
            SessionCommand::Photo { clear: true, path: None }
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(SessionLine::try_parse_from(["open", "ficus"]).is_err());
    }
}
