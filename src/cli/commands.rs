//! Command dispatch

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{HostLoop, LeafResolver, NavigationEvent};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::RouteId;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::WriterTarget;
use crate::infrastructure::InfraError;

/// Placeholder for "no active route" in `replay`.
const NO_ROUTE: &str = "-";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `routeroot --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let container = build_container(cli)?;
    match command {
        Commands::Tree => cmd_tree(&container),
        Commands::Routes => cmd_routes(&container),
        Commands::Render { route, format } => cmd_render(&container, route.as_deref(), *format),
        Commands::Replay { steps, format } => cmd_replay(&container, steps, *format),
        Commands::Check => cmd_check(&container),
        Commands::Config { command } => cmd_config(&container, command),
        Commands::Completion { .. } => Ok(()),
    }
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let project_dir = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("resolve current directory", e))?,
    };
    let mut settings = Settings::load(Some(&project_dir))?;
    if let Some(routes) = &cli.routes {
        settings.routes_file = routes.clone();
    }
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings, project_dir))
}

fn route_arg(route: Option<&str>) -> Option<RouteId> {
    match route {
        None | Some(NO_ROUTE) => None,
        Some(id) => Some(RouteId::from(id)),
    }
}

#[instrument(skip_all)]
fn cmd_tree(container: &ServiceContainer) -> CliResult<()> {
    let service = container.render_service()?;
    output::info(&service.tree().to_tree_string().to_string().trim_end());
    Ok(())
}

#[instrument(skip_all)]
fn cmd_routes(container: &ServiceContainer) -> CliResult<()> {
    let service = container.render_service()?;
    let tree = service.tree();
    let mut listed = 0;
    for leaf in tree.leaves() {
        if let Some(route_match) = tree.chain_to(&leaf) {
            let breadcrumb = tree.ids(&route_match).iter().join(" > ");
            output::action(leaf.as_str(), &breadcrumb);
            listed += 1;
        }
    }
    if listed == 0 {
        output::warning("no routes below the root");
    }
    Ok(())
}

#[instrument(skip_all, fields(route = ?route))]
fn cmd_render(
    container: &ServiceContainer,
    route: Option<&str>,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let format = format.unwrap_or(container.settings.format);
    let mount = container.root_mount()?;
    let mut mounted = mount.mount(Box::new(WriterTarget::stdout(format)))?;
    mounted.render_frame(&LeafResolver::new(route_arg(route)))?;
    if mounted.failures() > 0 {
        output::warning("render pass failed, fallback shown");
    }
    Ok(())
}

#[instrument(skip_all)]
fn cmd_replay(
    container: &ServiceContainer,
    steps: &[String],
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let format = format.unwrap_or(container.settings.format);
    let mount = container.root_mount()?;
    let mounted = mount.mount(Box::new(WriterTarget::stdout(format)))?;

    let (tx, rx) = mpsc::channel();
    for step in steps {
        tx.send(NavigationEvent::Navigate(route_arg(Some(step))))
            .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
    }
    tx.send(NavigationEvent::Shutdown)
        .map_err(|e| CliError::InvalidArgs(e.to_string()))?;

    let summary = HostLoop::new(mounted).run(rx)?;
    if summary.failures > 0 {
        output::warning(&format!(
            "{} of {} frames recovered by the boundary",
            summary.failures, summary.frames
        ));
    }
    Ok(())
}

#[instrument(skip_all)]
fn cmd_check(container: &ServiceContainer) -> CliResult<()> {
    let path = container.routes_path();
    let service = container.render_service()?;
    let tree = service.tree();
    output::success(&format!(
        "{}: {} routes, depth {}",
        path.display(),
        tree.len() - 1,
        tree.depth()
    ));
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Merged settings");
            output::info(&container.settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            let global = global_config_path();
            let local = local_config_path(&container.project_dir);
            output::action("global", &describe(global));
            output::action("local", &describe(Some(local)));
            output::action("routes", &describe(Some(container.routes_path())));
        }
        ConfigCommands::Template => {
            output::info(&Settings::template().trim_end());
        }
    }
    Ok(())
}

fn describe(path: Option<PathBuf>) -> String {
    match path {
        Some(path) if path.exists() => format!("{} (exists)", path.display()),
        Some(path) => format!("{} (missing)", path.display()),
        None => "(unavailable)".to_string(),
    }
}
