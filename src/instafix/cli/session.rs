//! Interactive session: every plain line is a problem to submit, lines starting
//! with `:` are commands acting on the current fix or the saved list.

use super::commands::{copy_current, print_current, print_message, save_message, saved_id};
use super::render::{render_saved_list, MessageLevel};
use super::styles::palette;
use instafix::controller::Phase;
use instafix::error::Result;
use instafix::init::AppController;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

const HELP: &str = "\
Type a problem and press enter to get a fix.
  :save        save or unsave the current fix
  :again       regenerate the current fix
  :new         start over
  :copy        copy the current fix to the clipboard
  :share       copy the current fix with the share footer
  :saved       list saved fixes
  :load <n>    show saved fix n
  :delete <n>  delete saved fix n
  :theme       switch between light and dark
  :help        show this help
  :quit        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Submit(String),
    Save,
    Again,
    New,
    Copy { share: bool },
    Saved,
    Load(usize),
    Delete(usize),
    Theme,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SessionInput::Blank;
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            return SessionInput::Submit(trimmed.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (name, arg) {
            ("save" | "s", None) => SessionInput::Save,
            ("again" | "a" | "regenerate", None) => SessionInput::Again,
            ("new" | "n", None) => SessionInput::New,
            ("copy" | "c", None) => SessionInput::Copy { share: false },
            ("share", None) => SessionInput::Copy { share: true },
            ("saved" | "ls", None) => SessionInput::Saved,
            ("load" | "l", Some(n)) => match n.parse() {
                Ok(n) => SessionInput::Load(n),
                Err(_) => SessionInput::Invalid(format!("Not a position: {}", n)),
            },
            ("delete" | "rm", Some(n)) => match n.parse() {
                Ok(n) => SessionInput::Delete(n),
                Err(_) => SessionInput::Invalid(format!("Not a position: {}", n)),
            },
            ("theme" | "t", None) => SessionInput::Theme,
            ("help" | "h" | "?", None) => SessionInput::Help,
            ("quit" | "q" | "exit", None) => SessionInput::Quit,
            _ => SessionInput::Invalid(format!("Unknown command: {}", trimmed)),
        }
    }
}

pub fn run(ctl: &mut AppController, rt: &Runtime) -> Result<()> {
    print_message(
        ctl,
        MessageLevel::Info,
        "What's on your mind? (:help for commands, :quit to leave)",
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", palette(ctl.theme()).muted.apply_to("›"));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match SessionInput::parse(&line) {
            SessionInput::Quit => break,
            input => handle_input(ctl, rt, input),
        }
    }
    Ok(())
}

fn handle_input(ctl: &mut AppController, rt: &Runtime, input: SessionInput) {
    match input {
        SessionInput::Submit(problem) => {
            print_message(ctl, MessageLevel::Info, "Thinking…");
            rt.block_on(ctl.submit(&problem));
            show_outcome(ctl);
        }
        SessionInput::Again => {
            if ctl.phase() == Phase::Idle {
                print_message(ctl, MessageLevel::Warning, "Nothing to regenerate yet.");
                return;
            }
            print_message(ctl, MessageLevel::Info, "Thinking…");
            rt.block_on(ctl.regenerate());
            show_outcome(ctl);
        }
        SessionInput::Save => match ctl.save() {
            Ok(toggled) => match save_message(toggled) {
                Some(message) => print_message(ctl, MessageLevel::Success, message),
                None => print_message(ctl, MessageLevel::Warning, "No fix to save yet."),
            },
            Err(e) => print_message(ctl, MessageLevel::Error, &e.to_string()),
        },
        SessionInput::New => {
            ctl.new_fix();
            print_message(ctl, MessageLevel::Info, "Cleared. What's on your mind?");
        }
        SessionInput::Copy { share } => {
            if ctl.result().is_none() {
                print_message(ctl, MessageLevel::Warning, "No fix to copy yet.");
            } else {
                copy_current(ctl, share);
            }
        }
        SessionInput::Saved => {
            print!(
                "{}",
                render_saved_list(ctl.saved().items(), palette(ctl.theme()))
            );
        }
        SessionInput::Load(n) => match saved_id(ctl, n) {
            Ok(id) => {
                ctl.load_saved(&id);
                print_current(ctl);
            }
            Err(e) => print_message(ctl, MessageLevel::Error, &e.to_string()),
        },
        SessionInput::Delete(n) => {
            match saved_id(ctl, n).and_then(|id| ctl.delete_saved(&id)) {
                Ok(()) => print_message(ctl, MessageLevel::Success, "Deleted."),
                Err(e) => print_message(ctl, MessageLevel::Error, &e.to_string()),
            }
        }
        SessionInput::Theme => match ctl.toggle_theme() {
            Ok(theme) => print_message(ctl, MessageLevel::Info, &format!("Theme: {}", theme)),
            Err(e) => print_message(ctl, MessageLevel::Error, &e.to_string()),
        },
        SessionInput::Help => println!("{}", HELP),
        SessionInput::Invalid(message) => print_message(ctl, MessageLevel::Warning, &message),
        SessionInput::Blank | SessionInput::Quit => {}
    }
}

fn show_outcome(ctl: &AppController) {
    match ctl.phase() {
        Phase::Displaying => print_current(ctl),
        Phase::Failed => {
            let message = ctl.error().unwrap_or_default().to_string();
            print_message(ctl, MessageLevel::Error, &message);
            print_message(ctl, MessageLevel::Info, "Type :again to retry.");
        }
        Phase::Idle | Phase::Submitting => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_submits_trimmed() {
        assert_eq!(
            SessionInput::parse("  I can't sleep  "),
            SessionInput::Submit("I can't sleep".to_string())
        );
    }

    #[test]
    fn blank_lines_do_nothing() {
        assert_eq!(SessionInput::parse("   "), SessionInput::Blank);
    }

    #[test]
    fn commands_and_aliases() {
        assert_eq!(SessionInput::parse(":save"), SessionInput::Save);
        assert_eq!(SessionInput::parse(":a"), SessionInput::Again);
        assert_eq!(SessionInput::parse(":share"), SessionInput::Copy { share: true });
        assert_eq!(SessionInput::parse(":load 2"), SessionInput::Load(2));
        assert_eq!(SessionInput::parse(":rm 1"), SessionInput::Delete(1));
        assert_eq!(SessionInput::parse(":q"), SessionInput::Quit);
    }

    #[test]
    fn bad_commands_are_reported() {
        assert!(matches!(
            SessionInput::parse(":load two"),
            SessionInput::Invalid(_)
        ));
        assert!(matches!(SessionInput::parse(":dance"), SessionInput::Invalid(_)));
        assert!(matches!(SessionInput::parse(":save now"), SessionInput::Invalid(_)));
    }
}
