//! Input helpers for the interactive session.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by every interactive prompt. The input is trimmed; `None` means EOF
/// or a read error, which the session treats as "stop playing".
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None, // Read error
    }
}
