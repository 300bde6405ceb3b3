//! # CLI Layer
//!
//! This module is **one possible UI client** for instafix. It is the only place
//! that parses arguments, writes to stdout/stderr and picks exit codes.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the controller and print
//! - The interactive session lives in `session.rs`
//!
//! One-shot commands and the session share the same controller; the only
//! difference is how long it lives.

use super::render::{render_fix, render_message, render_saved_list, MessageLevel};
use super::session;
use super::setup::{Cli, Commands, ThemeArg};
use super::styles::palette;
use clap::Parser;
use instafix::clipboard::{copy_to_clipboard, fix_copy_text, fix_share_text};
use instafix::controller::Phase;
use instafix::error::{FixError, Result};
use instafix::init::{initialize, AppController, FixContext};
use instafix::model::{FixId, Theme};
use instafix::saved::Toggled;
use std::process::ExitCode;
use tokio::runtime::{Builder, Runtime};

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize()?;
    let rt = Builder::new_current_thread().enable_all().build()?;

    match cli.command {
        Some(Commands::Ask {
            problem,
            save,
            copy,
        }) => return handle_ask(&mut ctx.controller, &rt, problem.join(" "), save, copy),
        Some(Commands::Saved) => handle_saved(&ctx.controller),
        Some(Commands::Show { index }) => handle_show(&mut ctx.controller, index)?,
        Some(Commands::Delete { index }) => handle_delete(&mut ctx.controller, index)?,
        Some(Commands::Copy { index, share }) => handle_copy(&ctx.controller, index, share)?,
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx.controller, mode)?,
        Some(Commands::Config) => handle_config(&ctx),
        None => session::run(&mut ctx.controller, &rt)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn handle_ask(
    ctl: &mut AppController,
    rt: &Runtime,
    problem: String,
    save: bool,
    copy: bool,
) -> Result<ExitCode> {
    if !rt.block_on(ctl.submit(&problem)) {
        return Err(FixError::Api("Describe your problem first".to_string()));
    }

    if ctl.phase() == Phase::Failed {
        let message = ctl.error().unwrap_or_default().to_string();
        eprint!(
            "{}",
            render_message(MessageLevel::Error, &message, palette(ctl.theme()))
        );
        return Ok(ExitCode::FAILURE);
    }

    if save {
        ctl.save()?;
    }
    print_current(ctl);

    if copy {
        copy_current(ctl, false);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_saved(ctl: &AppController) {
    print!(
        "{}",
        render_saved_list(ctl.saved().items(), palette(ctl.theme()))
    );
}

fn handle_show(ctl: &mut AppController, index: usize) -> Result<()> {
    let id = saved_id(ctl, index)?;
    ctl.load_saved(&id);
    print_current(ctl);
    Ok(())
}

fn handle_delete(ctl: &mut AppController, index: usize) -> Result<()> {
    let id = saved_id(ctl, index)?;
    let query = ctl
        .saved()
        .find_by_id(&id)
        .map(|fix| fix.query.clone())
        .unwrap_or_default();
    ctl.delete_saved(&id)?;
    print_message(
        ctl,
        MessageLevel::Success,
        &format!("Deleted saved fix {}: {}", index, query),
    );
    Ok(())
}

fn handle_copy(ctl: &AppController, index: usize, share: bool) -> Result<()> {
    let id = saved_id(ctl, index)?;
    if let Some(fix) = ctl.saved().find_by_id(&id) {
        let text = if share {
            fix_share_text(fix)
        } else {
            fix_copy_text(fix)
        };
        copy_to_clipboard(&text)?;
        print_message(ctl, MessageLevel::Success, "Copied to clipboard.");
    }
    Ok(())
}

fn handle_theme(ctl: &mut AppController, mode: Option<ThemeArg>) -> Result<()> {
    let theme = match mode {
        None => ctl.theme(),
        Some(ThemeArg::Toggle) => ctl.toggle_theme()?,
        Some(ThemeArg::Light) => ctl.set_theme(Theme::Light)?,
        Some(ThemeArg::Dark) => ctl.set_theme(Theme::Dark)?,
    };
    println!("theme = {}", theme);
    Ok(())
}

fn handle_config(ctx: &FixContext) {
    let key_state = if ctx.controller.generator().has_api_key() {
        "set"
    } else {
        "not set"
    };
    println!("data-dir = {}", ctx.data_dir.display());
    println!("model = {}", ctx.config.model);
    println!("api-base = {}", ctx.config.api_base);
    println!("api-key = {}", key_state);
    println!("theme = {}", ctx.controller.theme());
}

/// Map a 1-based list position to the id of that saved fix.
pub(super) fn saved_id(ctl: &AppController, index: usize) -> Result<FixId> {
    ctl.saved()
        .get(index)
        .map(|fix| fix.id.clone())
        .ok_or_else(|| FixError::Api(format!("No saved fix at position {}", index)))
}

pub(super) fn print_current(ctl: &AppController) {
    if let Some(fix) = ctl.result() {
        print!(
            "{}",
            render_fix(fix, ctl.is_current_saved(), palette(ctl.theme()))
        );
    }
}

pub(super) fn print_message(ctl: &AppController, level: MessageLevel, content: &str) {
    print!("{}", render_message(level, content, palette(ctl.theme())));
}

/// Copy the displayed fix. Clipboard trouble is a warning, not a failure.
pub(super) fn copy_current(ctl: &AppController, share: bool) {
    let Some(fix) = ctl.result() else {
        return;
    };
    let text = if share {
        fix_share_text(fix)
    } else {
        fix_copy_text(fix)
    };
    match copy_to_clipboard(&text) {
        Ok(()) => print_message(ctl, MessageLevel::Success, "Copied to clipboard."),
        Err(e) => print_message(
            ctl,
            MessageLevel::Warning,
            &format!("Failed to copy to clipboard: {}", e),
        ),
    }
}

pub(super) fn save_message(toggled: Option<Toggled>) -> Option<&'static str> {
    match toggled {
        Some(Toggled::Saved) => Some("Saved."),
        Some(Toggled::Unsaved) => Some("Removed from saved fixes."),
        None => None,
    }
}
