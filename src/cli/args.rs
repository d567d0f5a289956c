//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use a specific config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::flag::Flag;

/// ai-flags - Trailing prompt flags for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "ai-flags")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run as a UserPromptSubmit hook (reads event JSON on stdin)
    #[command(
        name = "hook",
        long_about = "Run as the assistant's UserPromptSubmit hook.\n\n\
            Reads the hook event JSON from stdin, looks for trailing flags in its \
            `prompt` field, and prints a hook response with the extra context. \
            Prompts without flags, or with unknown or disabled flags, produce no \
            output so the prompt passes through unchanged.",
        after_help = "\
SETUP:
    Register the hook in your assistant settings, e.g.:
    {
      \"hooks\": {
        \"UserPromptSubmit\": [
          { \"hooks\": [ { \"type\": \"command\", \"command\": \"ai-flags hook\" } ] }
        ]
      }
    }

TRY IT:
    echo '{\"prompt\": \"fix the bug -d\"}' | ai-flags hook"
    )]
    Hook,

    /// Show what context a prompt would receive
    #[command(
        name = "preview",
        long_about = "Preview how a prompt would be augmented.\n\n\
            Parses trailing flags from the prompt, validates them against your \
            configuration, and prints the cleaned prompt with the context that \
            the hook would add. Options must come before the prompt.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Single flag
    ai-flags preview fix the login bug -d

    # Subagent instructions only appear in plan mode
    ai-flags preview --mode plan refactor the parser -s -t"
    )]
    Preview {
        /// Permission mode to simulate (only \"plan\" changes behavior)
        #[arg(long = "mode", value_name = "MODE")]
        permission_mode: Option<String>,

        /// Prompt text, including trailing flags
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        prompt: Vec<String>,
    },

    /// List recognized flags and whether they are enabled
    #[command(name = "flags")]
    Flags,

    /// View or change flag configuration
    #[command(
        name = "config",
        long_about = "View or modify ai-flags configuration.\n\n\
            Configuration is stored as YAML in ~/.config/ai-flags/config.yaml \
            (or $XDG_CONFIG_HOME/ai-flags/config.yaml, or $AI_FLAGS_CONFIG). \
            Flags may be named by letter (c) or name (commit).",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show every flag and its state
    ai-flags config list

    # Turn off the no-lint flag
    ai-flags config disable no-lint

    # Replace the commit instructions
    ai-flags config set-content c \"Commit with a conventional commit message.\"

    # Start over
    ai-flags config reset"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    ai-flags completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    ai-flags completion zsh >> ~/.zshrc

    # Fish
    ai-flags completion fish > ~/.config/fish/completions/ai-flags.fish

    # PowerShell
    ai-flags completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// List every flag with its state
    List,
    /// Print the effective content for a flag
    Show {
        /// Flag letter or name
        flag: Flag,
    },
    /// Print the config file path
    Path,
    /// Enable a flag
    Enable {
        /// Flag letter or name
        flag: Flag,
    },
    /// Disable a flag
    Disable {
        /// Flag letter or name
        flag: Flag,
    },
    /// Replace a flag's built-in content
    SetContent {
        /// Flag letter or name
        flag: Flag,
        /// New content
        content: String,
    },
    /// Go back to a flag's built-in content
    ClearContent {
        /// Flag letter or name
        flag: Flag,
    },
    /// Restore the default configuration
    Reset,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn preview_keeps_trailing_flags_as_prompt() {
        let cli = Cli::try_parse_from(["ai-flags", "preview", "fix", "the", "bug", "-d", "-c"])
            .unwrap();
        match cli.command {
            Command::Preview {
                prompt,
                permission_mode,
            } => {
                assert_eq!(prompt, vec!["fix", "the", "bug", "-d", "-c"]);
                assert!(permission_mode.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn preview_mode_before_prompt() {
        let cli = Cli::try_parse_from(["ai-flags", "preview", "--mode", "plan", "task -s"]).unwrap();
        match cli.command {
            Command::Preview {
                prompt,
                permission_mode,
            } => {
                assert_eq!(prompt, vec!["task -s"]);
                assert_eq!(permission_mode.as_deref(), Some("plan"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_flag_accepts_letters_and_names() {
        let cli = Cli::try_parse_from(["ai-flags", "config", "disable", "no-lint"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Disable { flag: Flag::NoLint }
            }
        ));

        let cli = Cli::try_parse_from(["ai-flags", "config", "enable", "c"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Enable { flag: Flag::Commit }
            }
        ));

        assert!(Cli::try_parse_from(["ai-flags", "config", "enable", "x"]).is_err());
    }

    #[test]
    fn global_config_path() {
        let cli = Cli::try_parse_from(["ai-flags", "--config", "/tmp/a.yaml", "flags"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/a.yaml")));
    }
}
