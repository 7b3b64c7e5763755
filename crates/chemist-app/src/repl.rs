//! The interactive chat loop.
//!
//! Reads one line per turn, handles the control words, and prints each
//! reply wrapped to the terminal. Request failures are printed and the
//! loop carries on.

use std::io::Write;

use chemist_ai::ChatSession;
use console::style;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::commands::{self, Command};
use crate::wrap;

/// Run until `exit`/`quit` or end of input.
///
/// `width` fixes the wrap column; `None` asks the terminal before every reply.
pub async fn run<R, W>(
    session: &ChatSession,
    input: R,
    out: &mut W,
    width: Option<usize>,
) -> chemist_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{} ", style("You:").green())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            info!("Input closed, leaving chat loop");
            return Ok(());
        };

        match commands::parse(&line) {
            Command::Exit => {
                info!("Exit requested");
                return Ok(());
            }
            Command::Clear => {
                session.reset().await;
                writeln!(
                    out,
                    "{}",
                    style("Conversation cleared. Chemist context maintained.").yellow()
                )?;
            }
            Command::Message(text) => {
                write!(out, "{}", style("Chemist: ").cyan())?;
                out.flush()?;

                let (reply, failed) = match session.submit(text).await {
                    Ok(reply) => (reply, false),
                    Err(e) => (e.to_string(), true),
                };

                let width = width.unwrap_or_else(wrap::terminal_width);
                for line in wrap::wrap_reply(&reply, width) {
                    if failed {
                        writeln!(out, "{}", style(line).red())?;
                    } else {
                        writeln!(out, "{}", style(line).cyan())?;
                    }
                }
            }
        }
    }
}
