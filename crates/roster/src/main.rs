use clap::Parser;
use colored::Colorize;
use log::{debug, warn};
use rosterapp::api::RosterApi;
use rosterapp::citizen_id;
use rosterapp::config::RosterConfig;
use rosterapp::error::{Result, RosterError};
use rosterapp::model::{PersonFields, PersonPatch};
use rosterapp::store::fs_backend::FsBackend;
use rosterapp::view::SortSpec;

mod args;
mod logging;
mod print;

use args::{Cli, Commands, EditArgs, ListArgs, PersonArgs};
use print::{print_full_records, print_messages, print_page};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RosterConfig::load(Some(path.as_path()))?,
        None => RosterConfig::load_default()?,
    };

    let _logger = match logging::init_logging(&config.log_level, cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
            None
        }
    };

    let page_size = match &cli.command {
        Some(Commands::List(ListArgs {
            page_size: Some(n), ..
        })) => *n,
        _ => config.page_size(),
    };
    let mut ctx = init_context(&cli, &config, page_size);

    match cli.command {
        Some(Commands::Add(person)) => handle_add(&mut ctx, person),
        Some(Commands::Edit { key, fields }) => handle_edit(&mut ctx, key, fields),
        Some(Commands::Show { keys }) => handle_show(&mut ctx, keys),
        Some(Commands::Delete { keys }) => handle_delete(&mut ctx, keys),
        Some(Commands::List(list)) => handle_list(&mut ctx, list),
        Some(Commands::BulkDelete { keys, all }) => handle_bulk_delete(&mut ctx, keys, all),
        None => handle_list(&mut ctx, ListArgs::default()),
    }
}

fn init_context(cli: &Cli, config: &RosterConfig, page_size: usize) -> AppContext {
    let data_dir = cli.data_dir.clone().or_else(|| config.resolve_data_dir());
    match &data_dir {
        Some(dir) => debug!(
            "event=cli_context module=cli status=ok data_dir={}",
            dir.display()
        ),
        None => warn!("event=cli_context module=cli status=headless reason=no_data_dir"),
    }
    let api = RosterApi::open(FsBackend::new(data_dir), page_size);
    AppContext { api }
}

fn handle_add(ctx: &mut AppContext, person: PersonArgs) -> Result<()> {
    let fields = PersonFields {
        title: person.title,
        firstname: person.firstname,
        lastname: person.lastname,
        birthday: person.birthday,
        nationality: person.nationality,
        citizen_id: person.citizen_id.as_deref().and_then(citizen_id::parse),
        gender: person.gender,
        mobile_phone: person.mobile_phone,
        passport_no: person.passport_no.filter(|p| !p.trim().is_empty()),
        expected_salary: person.expected_salary,
    };
    let result = ctx.api.create(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, key: String, fields: EditArgs) -> Result<()> {
    let patch = edit_patch(fields);
    if patch.is_empty() {
        return Err(RosterError::Api("Nothing to change".into()));
    }
    let key = resolve_key(ctx, &key)?;
    let result = ctx.api.update(&key, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn edit_patch(fields: EditArgs) -> PersonPatch {
    let citizen_id = if fields.clear_citizen_id {
        Some(None)
    } else {
        fields.citizen_id.as_deref().map(citizen_id::parse)
    };
    let passport_no = if fields.clear_passport_no {
        Some(None)
    } else {
        fields
            .passport_no
            .map(|p| Some(p).filter(|p| !p.trim().is_empty()))
    };
    PersonPatch {
        title: fields.title,
        firstname: fields.firstname,
        lastname: fields.lastname,
        birthday: fields.birthday,
        nationality: fields.nationality,
        citizen_id,
        gender: fields.gender,
        mobile_phone: fields.mobile_phone,
        passport_no,
        expected_salary: fields.expected_salary,
    }
}

fn handle_show(ctx: &mut AppContext, keys: Vec<String>) -> Result<()> {
    let keys = resolve_keys(ctx, &keys)?;
    let result = ctx.api.view(&keys)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, keys: Vec<String>) -> Result<()> {
    let keys = resolve_keys(ctx, &keys)?;
    let result = match keys.as_slice() {
        [key] => ctx.api.delete(key)?,
        _ => ctx.api.delete_many(&keys)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, list: ListArgs) -> Result<()> {
    let sort = list.sort.map(|field| {
        if list.desc {
            SortSpec::descending(field)
        } else {
            SortSpec::ascending(field)
        }
    });
    ctx.api.set_sort(sort)?;
    let result = ctx.api.set_page(list.page)?;
    if let Some(view) = &result.page {
        print_page(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_bulk_delete(ctx: &mut AppContext, keys: Vec<String>, all: bool) -> Result<()> {
    if all {
        let selected = ctx.api.select_all()?;
        print_messages(&selected.messages);
    } else if keys.is_empty() {
        return Err(RosterError::Api(
            "Give the keys to delete, or --all".into(),
        ));
    } else {
        let keys = resolve_keys(ctx, &keys)?;
        let selected = ctx.api.select(&keys)?;
        print_messages(&selected.messages);
    }
    let result = ctx.api.bulk_delete()?;
    print_messages(&result.messages);
    Ok(())
}

fn resolve_keys(ctx: &AppContext, inputs: &[String]) -> Result<Vec<String>> {
    inputs.iter().map(|input| resolve_key(ctx, input)).collect()
}

/// Expands a unique key prefix, as shown in listings, to the full key.
/// Input that matches nothing is passed through for the command to report.
fn resolve_key(ctx: &AppContext, input: &str) -> Result<String> {
    if ctx.api.get(input).is_some() {
        return Ok(input.to_string());
    }
    let matches: Vec<&str> = ctx
        .api
        .records()
        .iter()
        .map(|p| p.key.as_str())
        .filter(|key| key.starts_with(input))
        .collect();
    match matches.as_slice() {
        [] => Ok(input.to_string()),
        [key] => Ok((*key).to_string()),
        _ => Err(RosterError::Api(format!(
            "Key prefix '{}' matches {} records",
            input,
            matches.len()
        ))),
    }
}
