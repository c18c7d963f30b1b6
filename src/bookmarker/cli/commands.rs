//! # CLI Layer
//!
//! One client of the bookmarker library. This is the only place that reads
//! arguments, prompts, writes to stdout and decides exit codes.
//!
//! - `run()`: parses arguments and dispatches
//! - `handle_*()`: call the API and render its `CmdResult`
//!
//! Business rules live in the command layer; handlers only translate.

use super::render::{print_full_records, print_messages, print_record_list, print_settings};
use super::setup::{Cli, Commands, CompletionShell};
use bookmarker::api::{BookmarkerApi, ConfigAction, RecordFilter};
use bookmarker::capture::GivenTab;
use bookmarker::error::Result;
use bookmarker::init::initialize;
use bookmarker::manager::SearchMode;
use bookmarker::opener::{NoopOpener, SystemOpener};
use bookmarker::store::fs::FileBackend;
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

struct AppContext {
    api: BookmarkerApi<FileBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_tracing(cli.verbose);

    // Completions need no data directory.
    if let Some(Commands::Completions { shell }) = &cli.command {
        return handle_completions(*shell);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            url,
            title,
            reminder,
        }) => handle_add(&mut ctx, url, title, reminder),
        Some(Commands::List { search, regex }) => handle_list(&mut ctx, search, regex),
        Some(Commands::Search { term, regex }) => {
            handle_list(&mut ctx, Some(term.join(" ")), regex)
        }
        Some(Commands::View { indexes }) => handle_view(&mut ctx, indexes),
        Some(Commands::Edit { index, reminder }) => handle_edit(&mut ctx, index, reminder),
        Some(Commands::Open {
            indexes,
            delete,
            print,
        }) => handle_open(&mut ctx, indexes, delete, print),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Export { output }) => handle_export(&mut ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Completions { shell }) => handle_completions(shell),
        Some(Commands::CompletePages) => handle_complete_pages(&mut ctx),
        None => handle_list(&mut ctx, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.as_deref())?;
    Ok(AppContext { api: ctx.api })
}

fn search_mode(regex: bool) -> SearchMode {
    if regex {
        SearchMode::Regex
    } else {
        SearchMode::Substring
    }
}

fn handle_add(
    ctx: &mut AppContext,
    url: Option<String>,
    title: Option<String>,
    reminder: Vec<String>,
) -> Result<()> {
    let source = GivenTab::new(url, title).or_env();
    let result = ctx.api.capture_page(&source, &reminder.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, regex: bool) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_pages(&term, search_mode(regex))?,
        None => ctx.api.list_pages(RecordFilter::default())?,
    };
    print_record_list(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_pages(&indexes)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, reminder: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_reminder(&index, &reminder.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, indexes: Vec<String>, delete: bool, print: bool) -> Result<()> {
    let result = if print {
        let result = ctx.api.open_pages(&NoopOpener::new(), &indexes, delete)?;
        for url in &result.opened_urls {
            println!("{}", url);
        }
        result
    } else {
        ctx.api.open_pages(&SystemOpener, &indexes, delete)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_pages(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        let count = ctx.api.records().len()?;
        if count == 0 {
            println!("{}", "There are no saved pages yet".dimmed());
            return Ok(());
        }
        if !confirm(&format!("Delete all {} saved pages?", count))? {
            println!("{}", "Nothing deleted.".dimmed());
            return Ok(());
        }
    }
    let result = ctx.api.clear_pages()?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks a yes/no question on the terminal. Without a terminal the answer is
/// no, so scripts have to pass `--yes`.
fn confirm(question: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        eprintln!("{} (pass --yes to confirm)", question);
        return Ok(false);
    }

    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_pages(output.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.import_pages(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(settings) = &result.settings {
            print_settings(settings);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_completions(shell: CompletionShell) -> Result<()> {
    match shell {
        CompletionShell::Bash => print!("{}", BASH_COMPLETION_SCRIPT),
        CompletionShell::Zsh => print!("{}", ZSH_COMPLETION_SCRIPT),
    }
    Ok(())
}

/// `<index>\t<title>` per page, read by the completion scripts.
fn handle_complete_pages(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_pages(RecordFilter::default())?;
    for dr in result.listed_records {
        println!("{}\t{}", dr.index, dr.record.title);
    }
    Ok(())
}

const BASH_COMPLETION_SCRIPT: &str = include_str!("bookmarker.bash");
const ZSH_COMPLETION_SCRIPT: &str = include_str!("bookmarker.zsh");
