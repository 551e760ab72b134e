//! Core of the minimat vector calculator.
//!
//! This crate defines the 3-component vector type and its arithmetic, the
//! ordered named-vector store, the line grammar that turns one input line
//! into a [`Command`], the [`Interpreter`] that executes commands against
//! the store, and the CSV codec used by `load` and `save`.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod command;
pub mod csv;
pub mod error;
pub mod executor;
pub mod store;
pub mod vector;

pub use command::{parse, Command, Expr, Operator};
pub use csv::{LoadReport, SkippedLine};
pub use error::{Error, Result};
pub use executor::{Interpreter, Outcome, ANS};
pub use store::{Entry, VectorStore, MAX_NAME_LEN};
pub use vector::Vector3;
