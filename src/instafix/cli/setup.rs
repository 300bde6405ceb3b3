use clap::{Parser, Subcommand, ValueEnum};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "instafix", bin_name = "instafix", version = get_version())]
#[command(
    about = "Instant, structured advice for everyday problems",
    long_about = "Describe a problem and get a 3-line insight, a 30-second plan and three \
                  immediate actions. Run without a command for an interactive session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for a fix
    #[command(alias = "a")]
    Ask {
        /// The problem, in your own words
        #[arg(required = true, num_args = 1..)]
        problem: Vec<String>,

        /// Save the fix right away
        #[arg(short, long)]
        save: bool,

        /// Copy the fix to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List saved fixes, newest first
    #[command(alias = "ls")]
    Saved,

    /// Show a saved fix
    #[command(alias = "v")]
    Show {
        /// Position in the saved list (1 is the newest)
        index: usize,
    },

    /// Delete a saved fix
    #[command(alias = "rm")]
    Delete {
        /// Position in the saved list (1 is the newest)
        index: usize,
    },

    /// Copy a saved fix to the clipboard
    Copy {
        /// Position in the saved list (1 is the newest)
        index: usize,

        /// Append the share footer
        #[arg(long)]
        share: bool,
    },

    /// Show or change the color theme
    Theme {
        /// New theme; omit to print the current one
        mode: Option<ThemeArg>,
    },

    /// Show the resolved configuration
    Config,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["instafix", "ask", "too", "many", "tabs", "--save"]).unwrap();
        match cli.command {
            Some(Commands::Ask {
                problem,
                save,
                copy,
            }) => {
                assert_eq!(problem, vec!["too", "many", "tabs"]);
                assert!(save);
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn ask_requires_a_problem() {
        assert!(Cli::try_parse_from(["instafix", "ask"]).is_err());
    }

    #[test]
    fn no_command_means_session() {
        let cli = Cli::try_parse_from(["instafix", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn theme_values() {
        let cli = Cli::try_parse_from(["instafix", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Theme {
                mode: Some(ThemeArg::Toggle)
            })
        ));
        assert!(Cli::try_parse_from(["instafix", "theme", "blue"]).is_err());
    }
}
