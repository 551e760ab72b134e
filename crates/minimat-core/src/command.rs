//! Line grammar.
//!
//! A line is read in a fixed order: directives first, then assignments
//! (split on the first `" = "`), then `dot`/`cross` calls, then binary
//! expressions, and finally a bare name. Operators must be surrounded by
//! single spaces; this keeps negative literals such as `-2` unambiguous
//! without a tokenizer, so `a+b` is not an expression.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::validate_name;
use crate::vector::Vector3;

const ASSIGN: &str = " = ";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Clear,
    List,
    Help,
    Load(PathBuf),
    Save(PathBuf),
    /// `name = <expr>`
    Assign { name: String, expr: Expr },
    /// An expression whose result is shown but not stored.
    Eval(Expr),
    /// A bare name: show the stored vector.
    Query(String),
}

/// The right-hand side of an assignment, or a standalone expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Vector3),
    Add(String, String),
    Sub(String, String),
    Scale { vector: String, factor: f64 },
    Cross(String, String),
    Dot(String, String),
}

/// Binary operator tokens, in the order they are looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
}

impl Operator {
    pub const ALL: [Self; 3] = [Self::Plus, Self::Minus, Self::Times];

    /// The literal text matched in the input, spaces included.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plus => " + ",
            Self::Minus => " - ",
            Self::Times => " * ",
        }
    }

    /// Find the operator to split on and its byte offset.
    ///
    /// Candidates are tried in priority order (`+`, `-`, `*`), not by
    /// position: `a * 2 + b` splits on the `+`.
    #[must_use]
    pub fn scan(text: &str) -> Option<(Self, usize)> {
        Self::ALL
            .iter()
            .find_map(|&op| text.find(op.token()).map(|at| (op, at)))
    }
}

/// Parse one trimmed, non-empty line.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();

    if let Some(command) = parse_directive(line)? {
        return Ok(command);
    }

    if let Some(at) = line.find(ASSIGN) {
        let name = line[..at].trim();
        let rhs = line[at + ASSIGN.len()..].trim();
        return parse_assignment(name, rhs);
    }

    if line.contains('=') {
        return Err(Error::Syntax {
            usage: "name = value (spaces around '=' are required)",
        });
    }

    if let Some(args) = line.strip_prefix("dot ") {
        let (a, b) = two_names(args, "dot a b")?;
        return Ok(Command::Eval(Expr::Dot(a, b)));
    }

    if let Some(args) = line.strip_prefix("cross ") {
        let (a, b) = two_names(args, "cross a b")?;
        return Ok(Command::Eval(Expr::Cross(a, b)));
    }

    if let Some(expr) = parse_binary(line)? {
        return Ok(Command::Eval(expr));
    }

    validate_name(line)?;
    Ok(Command::Query(line.to_string()))
}

fn parse_directive(line: &str) -> Result<Option<Command>> {
    let command = match line {
        "quit" => Command::Quit,
        "clear" => Command::Clear,
        "list" => Command::List,
        "help" | "-h" | "?" => Command::Help,
        "load" => return Err(Error::Syntax { usage: "load <file>" }),
        "save" => return Err(Error::Syntax { usage: "save <file>" }),
        _ => {
            if let Some(path) = line.strip_prefix("load ") {
                Command::Load(path_arg(path, "load <file>")?)
            } else if let Some(path) = line.strip_prefix("save ") {
                Command::Save(path_arg(path, "save <file>")?)
            } else {
                return Ok(None);
            }
        }
    };
    Ok(Some(command))
}

fn path_arg(raw: &str, usage: &'static str) -> Result<PathBuf> {
    let path = raw.trim();
    if path.is_empty() {
        return Err(Error::Syntax { usage });
    }
    Ok(PathBuf::from(path))
}

fn parse_assignment(name: &str, rhs: &str) -> Result<Command> {
    if name.is_empty() || rhs.is_empty() {
        return Err(Error::Syntax {
            usage: "name = value",
        });
    }
    validate_name(name)?;

    let expr = parse_rhs(rhs)?;
    Ok(Command::Assign {
        name: name.to_string(),
        expr,
    })
}

fn parse_rhs(rhs: &str) -> Result<Expr> {
    if let Some(value) = parse_literal(rhs) {
        return Ok(Expr::Literal(value));
    }

    if let Some(args) = rhs.strip_prefix("cross ") {
        let (a, b) = two_names(args, "c = cross a b")?;
        return Ok(Expr::Cross(a, b));
    }

    if rhs.starts_with("dot ") {
        return Err(Error::ScalarAssignment);
    }

    parse_binary(rhs)?.ok_or_else(|| {
        Error::InvalidExpression("expected numbers or an expression after '='".to_string())
    })
}

/// Two or three numbers separated by whitespace and/or commas. A missing
/// third component defaults to zero.
fn parse_literal(text: &str) -> Option<Vector3> {
    let spaced = text.replace(',', " ");
    let numbers = spaced
        .split_whitespace()
        .map(parse_number)
        .collect::<Option<Vec<f64>>>()?;

    match numbers[..] {
        [x, y] => Some(Vector3::new(x, y, 0.0)),
        [x, y, z] => Some(Vector3::new(x, y, z)),
        _ => None,
    }
}

/// A token is numeric only if it parses as `f64` in full.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

fn parse_binary(text: &str) -> Result<Option<Expr>> {
    let Some((op, at)) = Operator::scan(text) else {
        return Ok(None);
    };
    let lhs = text[..at].trim();
    let rhs = text[at + op.token().len()..].trim();

    let expr = match op {
        Operator::Plus => Expr::Add(operand_name(lhs)?, operand_name(rhs)?),
        Operator::Minus => Expr::Sub(operand_name(lhs)?, operand_name(rhs)?),
        Operator::Times => match (parse_number(lhs), parse_number(rhs)) {
            (None, Some(factor)) => Expr::Scale {
                vector: operand_name(lhs)?,
                factor,
            },
            (Some(factor), None) => Expr::Scale {
                vector: operand_name(rhs)?,
                factor,
            },
            _ => return Err(Error::AmbiguousMultiply),
        },
    };
    Ok(Some(expr))
}

fn operand_name(token: &str) -> Result<String> {
    validate_name(token)?;
    Ok(token.to_string())
}

fn two_names(args: &str, usage: &'static str) -> Result<(String, String)> {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => Ok((operand_name(a)?, operand_name(b)?)),
        _ => Err(Error::Syntax { usage }),
    }
}
