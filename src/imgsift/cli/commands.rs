use super::print::{
    print_attributes, print_config, print_criteria, print_messages, print_plan, print_plan_json,
};
use super::setup::{Cli, Commands, ViewArgs};
use clap::Parser;
use directories::ProjectDirs;
use imgsift::api::{ConfigAction, SiftApi};
use imgsift::config::ViewConfig;
use imgsift::error::{ImgsiftError, Result};
use imgsift::model::ViewSettings;
use imgsift::store::fs::CatalogFile;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "IMGSIFT_HOME";
const DEFAULT_CATALOG: &str = "catalog.json";

struct AppContext {
    api: SiftApi<CatalogFile>,
    config: ViewConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::View(args)) => handle_view(&ctx, args),
        Some(Commands::Criteria) => handle_criteria(&ctx),
        Some(Commands::Info { id }) => handle_info(&ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_view(&ctx, ViewArgs::default()),
    }
}

/// `RUST_LOG` wins; otherwise imgsift events at debug with `-v`, warn without.
fn init_tracing(verbose: bool) {
    let level = if verbose { "imgsift=debug" } else { "imgsift=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "imgsift", "imgsift")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ImgsiftError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ViewConfig::load(&config_dir)?;

    let catalog = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    Ok(AppContext {
        api: SiftApi::new(CatalogFile::new(catalog), config_dir),
        config,
    })
}

fn handle_view(ctx: &AppContext, args: ViewArgs) -> Result<()> {
    // Flags only switch on; the config supplies the rest.
    let settings = ViewSettings::new(args.sort.unwrap_or_else(|| ctx.config.sort.clone()))
        .with_query(args.query.unwrap_or_default())
        .reversed(args.reverse || ctx.config.reverse)
        .grouped(args.groups || ctx.config.groups);

    let result = ctx.api.view(settings, args.filter.as_deref())?;
    let Some(plan) = &result.plan else {
        return Ok(());
    };
    if args.json {
        // warnings are already logged to stderr
        print_plan_json(plan).map_err(ImgsiftError::Serialization)?;
    } else {
        print_plan(plan, &result.captions);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_criteria(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.criteria();
    print_criteria(&result.criteria);
    Ok(())
}

fn handle_info(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.info(id)?;
    print_attributes(&result.attributes);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
