use clap::{
    CommandFactory, FromArgMatches, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

mod commands;
mod config;
mod error;
mod exit;
mod shell;

use error::TabhookError;
use shell::ShellKind;

#[derive(Parser)]
#[command(name = "tabhook", styles = STYLES)]
#[command(about = "Generate shell snippets that register tab-completion for a command")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug-level logging)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Use a specific config file (ignores default config locations)
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    config_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the completion-registration snippet for a command
    ///
    /// The registered function re-invokes COMMAND with --compzsh, --compbash
    /// or --compfish plus --compgen and the current line, and expects
    /// newline-separated candidates on stdout.
    #[command(after_help = "The snippet is written to stdout. Append it to the file reported\n\
        by `tabhook paths` to install it.")]
    Script {
        /// Command name to register completion for
        command: String,

        /// Shell to generate for (defaults to the `shell` config key)
        #[arg(short, long, value_enum)]
        shell: Option<ShellKind>,
    },
    /// Print the startup file(s) where the snippet is conventionally installed
    #[command(after_help = "Bash prints two paths (.bashrc, then .bash_profile); append to\n\
        whichever exists, or to both.")]
    Paths {
        /// Shell to resolve paths for (defaults to the `shell` config key)
        #[arg(short, long, value_enum)]
        shell: Option<ShellKind>,
    },
    /// Classify a shell identifier string (e.g. a path like /bin/zsh)
    Detect {
        /// Shell identifier to classify
        raw: String,
    },
    /// Generate completions for tabhook itself
    Completions {
        /// Shell to emit tabhook's own completion script for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&cli).expect("clap argument parsing invariant");

    // Initialize tracing with appropriate filter level
    // RUST_LOG env var takes precedence, otherwise use --verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();

    let Some(command) = cli.command else {
        // Print help when no command is provided
        Cli::command()
            .print_help()
            .expect("failed to write help to stdout");
        println!();
        return;
    };

    let config = match &cli.config_file {
        Some(path) => config::Config::load_file(path),
        None => config::Config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit::ERROR);
        }
    };

    let result = match command {
        Commands::Script { command, shell } => commands::script::run(&command, shell, &config),
        Commands::Paths { shell } => commands::paths::run(shell, &config),
        Commands::Detect { raw } => commands::detect::run(&raw),
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        // Unrecognized shells get their own exit code so callers can branch
        let exit_code = match e {
            TabhookError::UnknownShell(_) => exit::UNSUPPORTED,
            _ => exit::ERROR,
        };
        std::process::exit(exit_code);
    }
}
