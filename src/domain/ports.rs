use std::io;

/// A blocking line-read-with-prompt primitive.
///
/// The workflow depends only on this synchronous string-in/string-out
/// contract, so tests can substitute scripted input for a real terminal.
pub trait Prompt {
    /// Shows `text` and blocks until the user supplies a line. The returned
    /// string carries no trailing newline.
    fn ask(&mut self, text: &str) -> io::Result<String>;
}
