use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use todoz::api::{ConfigAction, TodozApi};
use todoz::config::TodozConfig;
use todoz::editor::edit_text;
use todoz::error::{Result, TodozError};
use todoz::model::TodoId;
use todoz::store::fs::FileStore;
use tracing::{debug, warn};

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_config, print_footer, print_messages, print_todos};

/// Overrides the platform data directory.
const HOME_ENV: &str = "TODOZ_HOME";

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodozApi<FileStore>,
    config: TodozConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::List { filter }) => handle_list(&mut ctx, filter),
        Some(Commands::Toggle { ids }) => handle_toggle(&mut ctx, ids),
        Some(Commands::Edit { id, text }) => handle_edit(&mut ctx, id, text),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::ClearCompleted) => handle_clear_completed(&mut ctx),
        Some(Commands::ClearAll) => handle_clear_all(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "todoz", "todoz")
        .ok_or_else(|| TodozError::Config("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");

    let config = TodozConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        TodozConfig::default()
    });
    let api = TodozApi::open(FileStore::new(dir.clone()), dir)?;

    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    if ctx.config.add_delay_ms > 0 {
        thread::sleep(Duration::from_millis(ctx.config.add_delay_ms));
    }
    let result = ctx.api.add_todo(&text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>) -> Result<()> {
    let result = match filter {
        Some(name) => ctx.api.list_named(&name)?,
        None => ctx.api.list(ctx.config.default_filter)?,
    };
    print_todos(
        &result.listed_todos,
        result.total_count,
        ctx.api.current_filter(),
    );
    if result.total_count > 0 {
        print_footer(result.active_count);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, ids: Vec<TodoId>) -> Result<()> {
    let result = ctx.api.toggle_todos(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: TodoId, text: Vec<String>) -> Result<()> {
    let new_text = if text.is_empty() {
        match ctx.api.get_text(id) {
            Some(current) => edit_text(current)?,
            // Let the api report the missing id
            None => String::new(),
        }
    } else {
        text.join(" ")
    };

    let result = ctx.api.edit_todo(id, &new_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<TodoId>) -> Result<()> {
    let result = ctx.api.delete_todos(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear_completed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear_all(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    if let (Some(config), true) = (&result.config, show_all) {
        print_config(config);
    }
    Ok(())
}
