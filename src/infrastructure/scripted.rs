use crate::domain::ports::Prompt;
use std::collections::VecDeque;
use std::io;

/// A scripted prompt for tests.
///
/// Answers are handed out in order, and every prompt text asked is recorded
/// so tests can assert on which fields were gathered and in what order.
/// Running out of answers behaves like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// The prompt texts asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, text: &str) -> io::Result<String> {
        self.asked.push(text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
