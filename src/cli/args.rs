//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

/// Declarative route tree root: shared layout with a single always-present outlet
#[derive(Parser, Debug)]
#[command(name = "routeroot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Route file (overrides config)
    #[arg(short, long, global = true, env = "ROUTEROOT_ROUTES_FILE")]
    pub routes: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the route tree
    Tree,

    /// List leaf routes with their breadcrumb
    Routes,

    /// Render the root for one navigation state
    Render {
        /// Active leaf route (none: no active route, empty outlet)
        route: Option<String>,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Feed navigation events through the host loop, one frame each
    Replay {
        /// Active leaf per event, "-" for no active route
        #[arg(required = true, value_name = "ROUTE")]
        steps: Vec<String>,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate the route file
    Check,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}
