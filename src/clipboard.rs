//! Copying the summary line to the system clipboard.
//!
//! There is no clipboard API in std, so we pipe into whatever command the
//! platform ships. If none of them works the text is printed instead.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copied through the named command
    Clipboard(&'static str),
    /// Printed to stdout
    Printed,
}

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    for &(program, args) in CANDIDATES {
        match pipe_to(program, args, text) {
            Ok(()) => {
                debug!(program, "Copied summary to clipboard");
                return CopyOutcome::Clipboard(program);
            }
            Err(e) => debug!(program, "Clipboard command unavailable: {e}"),
        }
    }

    println!("{text}");
    CopyOutcome::Printed
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{program} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_has_a_clipboard_command() {
        assert!(!CANDIDATES.is_empty());
    }

    #[test]
    fn test_pipe_to_missing_program_fails() {
        assert!(pipe_to("agecalc-no-such-clipboard-tool", &[], "hello").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_pipe_to_reports_exit_status() {
        assert!(pipe_to("cat", &[], "hello").is_ok());
        assert!(pipe_to("false", &[], "hello").is_err());
    }
}
