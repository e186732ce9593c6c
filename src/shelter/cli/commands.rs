//! # CLI Layer
//!
//! This module is **one possible UI client** for shelter; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and format output
//! - `render`: Output formatting functions

use super::render::{print_config, print_full_pets, print_messages, print_pet_list};
use super::setup::{AddArgs, Cli, Commands, EditArgs, ListArgs};
use shelter::api::{ConfigAction, ShelterApi};
use shelter::error::Result;
use shelter::init::{initialize, ShelterContext};
use shelter::store::catalog_store::BlobStore;
use shelter::store::fs_backend::FsBackend;

type Api = ShelterApi<BlobStore<FsBackend>>;

pub fn run(cli: Cli) -> Result<()> {
    let ShelterContext { mut api, .. } = initialize(cli.home)?;
    print_messages(api.startup_messages());

    match cli.command {
        Some(Commands::List(args)) => handle_list(&api, &args),
        Some(Commands::View { selectors }) => handle_view(&api, &selectors),
        Some(Commands::Add(args)) => handle_add(&mut api, &args),
        Some(Commands::Edit(args)) => handle_edit(&mut api, &args),
        Some(Commands::Remove { selectors }) => handle_remove(&mut api, &selectors),
        Some(Commands::Path) => handle_path(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, &ListArgs::default()),
    }
}

fn handle_list(api: &Api, args: &ListArgs) -> Result<()> {
    let result = api.list_pets(args.filter())?;
    if !result.listed_pets.is_empty() || result.messages.is_empty() {
        print_pet_list(&result.listed_pets);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &Api, selectors: &[String]) -> Result<()> {
    let result = api.view_pets(selectors)?;
    print_full_pets(&result.listed_pets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut Api, args: &AddArgs) -> Result<()> {
    let result = api.add_pet(args.new_pet())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut Api, args: &EditArgs) -> Result<()> {
    let result = api.update_pet(&args.selector, &args.update())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut Api, selectors: &[String]) -> Result<()> {
    let result = api.remove_pets(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(api: &Api) -> Result<()> {
    println!("{}", api.location());
    Ok(())
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
