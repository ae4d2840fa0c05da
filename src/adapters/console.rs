use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Console over the process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        // prompts have no trailing newline
        stdout.flush()?;
        Ok(())
    }
}

/// In-memory console: input is a queue of lines, output is captured.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
    }

    #[test]
    fn test_scripted_console_round() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        console.write("Name: ").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        console.write_line("ok").unwrap();
        assert_eq!(console.remaining_input(), 1);
        assert_eq!(console.output(), "Name: ok\n");
        console.read_line().unwrap();
        assert_eq!(console.read_line().unwrap(), None);
    }
}
