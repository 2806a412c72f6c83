//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

use archgen_core::domain::ArchitectureStyle;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archgen",
    bin_name = "archgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "The ArchGen Developers",
    about    = "\u{1f3d7} Layered .NET solution scaffolding",
    long_about = "ArchGen generates multi-project .NET solutions conforming to \
                  a layered architecture style, wiring project and package \
                  references and seeding base-class boilerplate.",
    after_help = "EXAMPLES:\n\
        \x20 archgen nlayer MyProject\n\
        \x20 archgen onion MyShop --output ./solutions\n\
        \x20 archgen nlayer Acme --dry-run\n\
        \x20 archgen list\n\
        \x20 archgen completions bash > /usr/share/bash-completion/completions/archgen\n\n\
        The solution is generated in the current directory unless --output is given.",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an N-Layer architecture solution.
    #[command(
        about = "Generate an N-Layer solution",
        after_help = "EXAMPLES:\n\
            \x20 archgen nlayer MyProject\n\
            \x20 archgen nlayer Acme --output ./work --dry-run\n\n\
            Layers: Core, Entities, DataAccess, Business, API."
    )]
    Nlayer(GenerateArgs),

    /// Generate an Onion architecture solution.
    #[command(
        about = "Generate an Onion solution",
        after_help = "EXAMPLES:\n\
            \x20 archgen onion MyProject\n\
            \x20 archgen onion Shop --dry-run\n\n\
            Layers: Domain, Application, Infrastructure, Persistence, API."
    )]
    Onion(GenerateArgs),

    /// List the built-in architecture styles.
    #[command(
        visible_alias = "ls",
        about = "List built-in styles and their layers",
        after_help = "EXAMPLES:\n\
            \x20 archgen list\n\
            \x20 archgen list --style onion"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archgen completions bash > ~/.local/share/bash-completion/completions/archgen\n\
            \x20 archgen completions zsh  > ~/.zfunc/_archgen\n\
            \x20 archgen completions fish > ~/.config/fish/completions/archgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── nlayer / onion ────────────────────────────────────────────────────────────

/// Arguments shared by the two generate subcommands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Solution name.  Falls back to `defaults.solution_name` from the
    /// configuration file, then to the placeholder `MyProject`.
    #[arg(value_name = "NAME", help = "Solution name")]
    pub name: Option<String>,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `archgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show a single style only.
    #[arg(short = 's', long = "style", value_enum, help = "Filter by style")]
    pub style: Option<StyleArg>,
}

/// Style filter for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    Nlayer,
    Onion,
}

impl From<StyleArg> for ArchitectureStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Nlayer => ArchitectureStyle::NLayer,
            StyleArg::Onion => ArchitectureStyle::Onion,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_nlayer_with_name() {
        let cli = Cli::parse_from(["archgen", "nlayer", "MyProject"]);
        if let Commands::Nlayer(args) = cli.command {
            assert_eq!(args.name.as_deref(), Some("MyProject"));
            assert!(!args.dry_run);
        } else {
            panic!("expected Nlayer command");
        }
    }

    #[test]
    fn parse_onion_without_name() {
        let cli = Cli::parse_from(["archgen", "onion"]);
        if let Commands::Onion(args) = cli.command {
            assert_eq!(args.name, None);
        } else {
            panic!("expected Onion command");
        }
    }

    #[test]
    fn parse_dry_run_and_output() {
        let cli = Cli::parse_from(["archgen", "nlayer", "Acme", "--dry-run", "-o", "/tmp/x"]);
        if let Commands::Nlayer(args) = cli.command {
            assert!(args.dry_run);
            assert_eq!(args.output.as_deref(), Some(std::path::Path::new("/tmp/x")));
        } else {
            panic!("expected Nlayer command");
        }
    }

    #[test]
    fn list_style_filter_converts() {
        let cli = Cli::parse_from(["archgen", "list", "--style", "onion"]);
        if let Commands::List(args) = cli.command {
            assert_eq!(
                args.style.map(ArchitectureStyle::from),
                Some(ArchitectureStyle::Onion)
            );
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["archgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
