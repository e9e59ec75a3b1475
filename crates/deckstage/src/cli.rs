use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckstage")]
#[command(author, version, about)]
#[command(long_about = "Present a markdown slide deck.\n\n\
    Navigate with arrows, space, page keys, the mouse wheel, touch swipes,\n\
    or the on-screen arrows and dots.\n\n\
    Examples:\n  \
    deckstage talk.md              Launch presentation (fullscreen)\n  \
    deckstage talk.md --windowed   Launch in a window\n  \
    deckstage talk.md --slide 4    Open on the fourth slide")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Markdown deck to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Turn off the ambient particle overlay
    #[arg(long, global = false)]
    pub no_particles: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.particles)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    let options = crate::app::LaunchOptions {
                        windowed: self.windowed,
                        start_slide: self.slide,
                        particles: !self.no_particles,
                    };
                    crate::app::run(file, options)
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_presentation_flags() {
        let cli = Cli::try_parse_from([
            "deckstage",
            "talk.md",
            "--windowed",
            "--slide",
            "3",
            "--no-particles",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("talk.md")));
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(3));
        assert!(cli.no_particles);
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_config_set() {
        let cli =
            Cli::try_parse_from(["deckstage", "config", "set", "defaults.theme", "light"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "defaults.theme");
                assert_eq!(value, "light");
            }
            _ => panic!("expected config set"),
        }
    }
}
