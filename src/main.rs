use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use roview::{
    config, discovery,
    layout::ColsLayout,
    menu::model::MenuModel,
    view::{render, Component},
};

#[derive(Parser, Debug)]
#[command(name = "roview", version, about = "Menu and layout view-model for restful-objects services")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds the menu from a services document and prints it.
    Menu {
        /// Services JSON (array, or object with a `services` array).
        /// If omitted, `roview.json` / config defaults may be used.
        #[arg(long)]
        services: Option<PathBuf>,
        /// Number of services to wait for before the menu counts as complete.
        #[arg(long)]
        limit: Option<usize>,
        /// Print the menu spec as JSON.
        #[arg(long)]
        json: bool,
        /// Show the services document as read, too.
        #[arg(long)]
        raw: bool,
    },
    /// Looks up the action registered under a service id.
    FindAction {
        #[arg(long)]
        services: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
        url: String,
    },
    /// Builds a component tree from a layout document and prints it.
    Layout {
        /// Layout JSON with a `col` descriptor.
        path: Option<PathBuf>,
        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Creates an empty config file if none exists and prints its path.
    InitConfig,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn load_menu(services: Option<PathBuf>, limit: Option<usize>) -> Result<MenuModel> {
    let cfg = config::load_optional()?;
    let resolved = config::resolve(
        cfg.as_ref(),
        &config::Overrides {
            services: services.as_deref(),
            menu_limit: limit,
            ..Default::default()
        },
    );
    let Some(path) = resolved.services else {
        bail!("No services document given (pass --services or set `services` in the config)");
    };
    let source = discovery::source(&path);
    MenuModel::load(&*source, resolved.menu_limit)
        .with_context(|| format!("build menu from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Command::Menu {
            services,
            limit,
            json,
            raw,
        } => {
            let model = load_menu(services, limit)?;
            if raw {
                if let Some(raw) = model.raw() {
                    println!("{raw}");
                }
            }
            let spec = model.menu_spec().context("collect menu titles")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&spec).context("serialize menu")?
                );
            } else {
                print!("{}", render::menu(&spec));
            }
            if !model.menu().is_complete() {
                warn!(
                    count = model.menu().count(),
                    limit = model.menu().limit(),
                    "menu incomplete: fewer services fed than the limit expects"
                );
            }
        }
        Command::FindAction {
            services,
            limit,
            url,
        } => {
            let model = load_menu(services, limit)?;
            let Some(action) = model.menu().find_action(&url) else {
                bail!("No action registered under '{url}'");
            };
            println!("{}", action.id);
            if let Some(href) = action.href.as_deref() {
                println!("{href}");
            }
        }
        Command::Layout { path, json } => {
            let cfg = config::load_optional()?;
            let resolved = config::resolve(
                cfg.as_ref(),
                &config::Overrides {
                    layout: path.as_deref(),
                    ..Default::default()
                },
            );
            let Some(path) = resolved.layout else {
                bail!("No layout document given (pass a path or set `layout` in the config)");
            };
            let layout = ColsLayout::from_path(&path)?;
            let tree = Component::from(
                layout
                    .build()
                    .with_context(|| format!("build layout {}", path.display()))?,
            );
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tree).context("serialize layout")?
                );
            } else {
                print!("{}", render::outline(&tree));
            }
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists()?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
