//! Control words recognized by the chat loop.

/// What one line of operator input asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `exit` or `quit`.
    Exit,
    /// `/clear`: start over with the persona pair.
    Clear,
    /// Anything else, forwarded verbatim.
    Message(String),
}

/// Classify a line. Only the exact control words match, in any case;
/// everything else, blank lines included, is a message.
pub fn parse(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    match line.to_lowercase().as_str() {
        "exit" | "quit" => Command::Exit,
        "/clear" => Command::Clear,
        _ => Command::Message(line.to_string()),
    }
}
