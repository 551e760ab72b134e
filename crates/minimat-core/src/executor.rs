//! Command execution against an owned [`VectorStore`].

use std::fmt;
use std::path::PathBuf;

use crate::command::{parse, Command, Expr};
use crate::csv::{self, LoadReport};
use crate::error::{Error, Result};
use crate::store::{Entry, VectorStore};
use crate::vector::Vector3;

/// Label used for results that are shown but not assigned.
pub const ANS: &str = "ans";

/// The visible result of one command.
///
/// `Display` renders exactly what the prompt loop prints; outcomes with no
/// output render as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `<name> = <x>   <y>   <z>`
    Vector { name: String, value: Vector3 },
    /// `dot(<a>,<b>) = <value>`
    Dot { lhs: String, rhs: String, value: f64 },
    Listing(Vec<Entry>),
    Loaded { path: PathBuf, report: LoadReport },
    Saved { path: PathBuf, count: usize },
    Cleared,
    Help,
    Quit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector { name, value } => write!(f, "{name} = {value}"),
            Self::Dot { lhs, rhs, value } => write!(f, "dot({lhs},{rhs}) = {value:.3}"),
            Self::Listing(entries) if entries.is_empty() => f.write_str("(no vectors stored)"),
            Self::Listing(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} = {}", entry.name, entry.value)?;
                }
                Ok(())
            }
            Self::Loaded { report, .. } => write!(f, "{report}"),
            Self::Saved { .. } | Self::Cleared | Self::Help | Self::Quit => Ok(()),
        }
    }
}

/// Parses and executes lines against the vector store it owns.
#[derive(Debug, Default)]
pub struct Interpreter {
    store: VectorStore,
}

impl Interpreter {
    #[must_use]
    pub fn new(store: VectorStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &VectorStore {
        &self.store
    }

    /// Parse and execute one trimmed, non-empty line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        let command = parse(line)?;
        log::debug!("{line:?} -> {command:?}");
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Quit => Ok(Outcome::Quit),
            Command::Help => Ok(Outcome::Help),
            Command::Clear => {
                self.store.clear();
                Ok(Outcome::Cleared)
            }
            Command::List => Ok(Outcome::Listing(self.store.list().to_vec())),
            Command::Load(path) => {
                let report = csv::load(&mut self.store, &path)?;
                Ok(Outcome::Loaded { path, report })
            }
            Command::Save(path) => {
                let count = csv::save(&self.store, &path)?;
                Ok(Outcome::Saved { path, count })
            }
            Command::Query(name) => {
                let value = self.lookup("vector", &name)?;
                Ok(Outcome::Vector { name, value })
            }
            Command::Assign { name, expr } => {
                let value = self.evaluate(&expr)?;
                self.store.set(&name, value)?;
                Ok(Outcome::Vector { name, value })
            }
            Command::Eval(Expr::Dot(lhs, rhs)) => {
                let (a, b) = self.operands(&lhs, &rhs)?;
                Ok(Outcome::Dot {
                    value: a.dot(b),
                    lhs,
                    rhs,
                })
            }
            Command::Eval(expr) => Ok(Outcome::Vector {
                name: ANS.to_string(),
                value: self.evaluate(&expr)?,
            }),
        }
    }

    /// Evaluate a vector-valued expression. A dot product is a scalar and
    /// cannot stand where a vector is expected.
    fn evaluate(&self, expr: &Expr) -> Result<Vector3> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Add(a, b) => {
                let (a, b) = self.operands(a, b)?;
                Ok(a + b)
            }
            Expr::Sub(a, b) => {
                let (a, b) = self.operands(a, b)?;
                Ok(a - b)
            }
            Expr::Scale { vector, factor } => {
                Ok(self.lookup("vector operand", vector)?.scale(*factor))
            }
            Expr::Cross(a, b) => {
                let (a, b) = self.operands(a, b)?;
                Ok(a.cross(b))
            }
            Expr::Dot(..) => Err(Error::ScalarAssignment),
        }
    }

    fn operands(&self, lhs: &str, rhs: &str) -> Result<(Vector3, Vector3)> {
        Ok((
            self.lookup("left operand", lhs)?,
            self.lookup("right operand", rhs)?,
        ))
    }

    fn lookup(&self, role: &'static str, name: &str) -> Result<Vector3> {
        self.store
            .get(name)
            .ok_or_else(|| Error::not_found(role, name))
    }
}
