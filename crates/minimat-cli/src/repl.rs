//! The read-eval-print loop around [`Interpreter`].
//!
//! Every error is reported on its own `Error: ...` line and the loop keeps
//! going; only `quit` or end of input ends a session.

use std::io::{self, BufRead, Write};

use minimat_core::{Command, Interpreter, Outcome, Result};

use crate::help::COMMAND_REFERENCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Repl {
    interpreter: Interpreter,
    prompt: String,
}

impl Repl {
    #[must_use]
    pub fn new(interpreter: Interpreter, prompt: impl Into<String>) -> Self {
        Self {
            interpreter,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Read lines until `quit` or end of input. The prompt is only written
    /// when `interactive` is set.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        interactive: bool,
    ) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if interactive {
                write!(out, "{}", self.prompt)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                if interactive {
                    writeln!(out)?;
                }
                break;
            }

            if self.handle_line(&line, out)? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one raw input line and print its result. Blank lines are
    /// ignored.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Control> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Control::Continue);
        }
        let result = self.interpreter.execute_line(line);
        report(result, out)
    }

    /// Run an already-parsed command, such as the startup `--load`.
    pub fn handle_command<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> io::Result<Control> {
        let result = self.interpreter.execute(command);
        report(result, out)
    }
}

fn report<W: Write>(result: Result<Outcome>, out: &mut W) -> io::Result<Control> {
    match result {
        Ok(Outcome::Quit) => return Ok(Control::Quit),
        Ok(Outcome::Help) => writeln!(out, "{COMMAND_REFERENCE}")?,
        Ok(outcome) => {
            let text = outcome.to_string();
            if !text.is_empty() {
                writeln!(out, "{text}")?;
            }
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            writeln!(out, "Error: {e}")?;
        }
    }
    Ok(Control::Continue)
}
