// lib.rs

pub mod calculator;
pub mod error;
pub mod history;
pub mod parser;

pub use calculator::SimpleCalculator;
pub use error::CalcError;
pub use history::{History, InMemoryHistory, MAX_HISTORY_SIZE};
