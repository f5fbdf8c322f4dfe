use crate::domain::ports::Prompt;
use std::io::{self, BufRead, Write};

/// The terminal prompt adapter: writes the prompt text to stdout, flushes,
/// and blocks on a line from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, text: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
