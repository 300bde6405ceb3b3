use crate::error::{FixError, Result};
use crate::model::{Card, FixResult};
use std::io::Write;
use std::process::{Command, Stdio};

const SHARE_FOOTER: &str = "Shared via Instant Fix.";

type ClipboardCommand = (&'static str, &'static [&'static str]);

/// Clipboard programs to try, in order, for the current platform.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];

/// Copies text to the system clipboard using the platform's clipboard program.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                log::debug!("Clipboard via {} failed: {}", program, e);
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| {
        FixError::Api("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| FixError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| FixError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| FixError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(FixError::Api(format!("{} exited with error", program)))
    }
}

/// Card title, blank line, card content. Step lists are numbered.
pub fn card_copy_text(card: &Card) -> String {
    format!("{}\n\n{}", card.title(), card.body.to_plain_text())
}

pub fn card_share_text(card: &Card) -> String {
    format!("{}\n\n{}", card_copy_text(card), SHARE_FOOTER)
}

/// All three cards of a fix, separated by blank lines.
pub fn fix_copy_text(fix: &FixResult) -> String {
    fix.cards()
        .iter()
        .map(card_copy_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn fix_share_text(fix: &FixResult) -> String {
    format!("{}\n\n{}", fix_copy_text(fix), SHARE_FOOTER)
}
