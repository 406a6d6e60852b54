use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small calculator built around an operation registry")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Fixed number of decimals for results (overrides the config file)
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Evaluate a single `<a> <op> <b>` expression
    Eval {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// List the registered operations
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the description of an operation
    Describe {
        #[arg(allow_hyphen_values = true)]
        op: String,
    },
    /// Feed a key sequence through the keypad, e.g. `12+3=`
    Keys {
        #[arg(allow_hyphen_values = true)]
        sequence: String,
    },
    /// Interactive keypad (default)
    Repl,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Repl)
    }
}
