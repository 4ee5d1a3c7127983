use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CONFIG, ENV_DEBUG, ENV_HOST, ENV_PORT, ENV_SEED_EMPLOYEES, ENV_SEED_ON_START,
};

#[derive(Parser)]
#[command(name = "staffdir")]
#[command(version, about = "Employee directory with filter presets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Enable debug logging
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Seed an empty database when the server starts
    #[arg(long, global = true, env = ENV_SEED_ON_START)]
    pub seed_on_start: Option<bool>,

    /// Number of employees generated by seeding
    #[arg(long, global = true, env = ENV_SEED_EMPLOYEES)]
    pub seed_employees: Option<usize>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// Seed the database with synthetic employees and exit
    Seed,
    /// System maintenance commands
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SystemCommands {
    /// Delete local data directory (database included). Requires confirmation.
    Prune {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub seed_on_start: Option<bool>,
    pub seed_employees: Option<usize>,
}

impl Cli {
    fn into_parts(self) -> (CliConfig, Option<Commands>) {
        let config = CliConfig {
            host: self.host,
            port: self.port,
            debug: self.debug,
            config: self.config,
            seed_on_start: self.seed_on_start,
            seed_employees: self.seed_employees,
        };
        (config, self.command)
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    Cli::parse().into_parts()
}
