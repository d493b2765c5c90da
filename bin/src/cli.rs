use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "glide", about = "Smooth scroll animation tools", version)]
pub struct Cli {
    /// TOML configuration; defaults apply when omitted
    #[arg(short, long, global = true, env = "GLIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path, or a directory to place `glide-<pid>.log` in
    #[arg(long, global = true, env = "GLIDE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every scroll write of an animation from one offset to another
    Simulate(SimulateArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Starting scroll offset in pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub from: f64,

    /// Top offset of the target element in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_simulate() {
        let cli = Cli::parse_from(["glide", "simulate", "--to", "800"]);
        match cli.command {
            Command::Simulate(args) => {
                assert_eq!(args.from, 0.0);
                assert_eq!(args.to, 800.0);
            },
            Command::Config => panic!("expected simulate"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["glide", "config", "--config", "glide.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("glide.toml")));
        assert!(matches!(cli.command, Command::Config));
    }
}
