use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use minimat_core::{Command, Interpreter, VectorStore};

use crate::config::Config;
use crate::repl::{Control, Repl};

/// Start a calculator session.
///
/// The store is capped when `max_vectors` is configured. `preload` is
/// loaded before anything else; a failed preload is reported like any
/// other command error and the session still starts. With `eval` lines the
/// session runs them in order and returns; otherwise it reads standard
/// input, prompting only when stdin is a terminal.
pub fn run_session(config: &Config, preload: Option<PathBuf>, eval: &[String]) -> Result<()> {
    let store = match config.max_vectors {
        Some(limit) => VectorStore::with_capacity_limit(limit),
        None => VectorStore::new(),
    };
    let mut repl = Repl::new(Interpreter::new(store), config.prompt.as_str());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = preload {
        log::info!("Preloading vectors from {}", path.display());
        repl.handle_command(Command::Load(path), &mut out)
            .context("Failed to write output")?;
    }

    if !eval.is_empty() {
        for line in eval {
            if repl.handle_line(line, &mut out).context("Failed to write output")?
                == Control::Quit
            {
                break;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        writeln!(
            out,
            "minimat: 3D vector calculator. Type `help` for commands, `quit` to exit."
        )?;
    }

    repl.run(stdin.lock(), &mut out, interactive)
        .context("Failed to run session")?;

    log::info!(
        "Session ended with {} stored vectors",
        repl.interpreter().store().len()
    );
    Ok(())
}
