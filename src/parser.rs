// parser.rs

use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Op {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "+" | "add" => Ok(Op::Add),
            "-" | "sub" => Ok(Op::Sub),
            "*" | "mul" => Ok(Op::Mul),
            "/" | "div" => Ok(Op::Div),
            _ => Err(ParseError::UnknownCommand(s.to_string())),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Eval { a: i32, op: Op, b: i32 },
    History(Option<usize>),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("bad operand: {0} (expected a 32-bit integer)")]
    BadOperand(String),
    #[error("bad count: {0}")]
    BadCount(String),
    #[error("usage: <a> <op> <b>, or: <op> <a> <b> (op is + - * / or add sub mul div)")]
    Malformed,
}

/// Splits a line into a command. Whitespace tokenization only; there is no
/// expression grammar. A blank line parses to `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        ["exit"] | ["quit"] => Ok(Some(Command::Exit)),
        ["help"] => Ok(Some(Command::Help)),
        ["history"] => Ok(Some(Command::History(None))),
        ["history", n] => {
            let n = n.parse::<usize>().map_err(|_| ParseError::BadCount(n.to_string()))?;
            Ok(Some(Command::History(Some(n))))
        }
        [first, second, third] => {
            // infix "1 + 2" is tried first so "5 - -3" keeps its operator
            if let Ok(op) = second.parse::<Op>() {
                Ok(Some(Command::Eval {
                    a: parse_operand(first)?,
                    op,
                    b: parse_operand(third)?,
                }))
            } else if let Ok(op) = first.parse::<Op>() {
                Ok(Some(Command::Eval {
                    a: parse_operand(second)?,
                    op,
                    b: parse_operand(third)?,
                }))
            } else {
                Err(ParseError::UnknownCommand(first.to_string()))
            }
        }
        [cmd] => Err(ParseError::UnknownCommand(cmd.to_string())),
        _ => Err(ParseError::Malformed),
    }
}

fn parse_operand(token: &str) -> Result<i32, ParseError> {
    // out-of-range literals are rejected here, at the edge of the i32 domain
    token
        .parse::<i32>()
        .map_err(|_| ParseError::BadOperand(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_infix_form() {
        assert_eq!(
            parse_line("1 + 2"),
            Ok(Some(Command::Eval { a: 1, op: Op::Add, b: 2 }))
        );
        assert_eq!(
            parse_line("10 / 2"),
            Ok(Some(Command::Eval { a: 10, op: Op::Div, b: 2 }))
        );
    }

    #[test]
    fn parses_word_form() {
        assert_eq!(
            parse_line("add 1 2"),
            Ok(Some(Command::Eval { a: 1, op: Op::Add, b: 2 }))
        );
        assert_eq!(
            parse_line("mul -3 4"),
            Ok(Some(Command::Eval { a: -3, op: Op::Mul, b: 4 }))
        );
    }

    #[test]
    fn negative_operands_survive_infix_minus() {
        assert_eq!(
            parse_line("5 - -3"),
            Ok(Some(Command::Eval { a: 5, op: Op::Sub, b: -3 }))
        );
    }

    #[test]
    fn parses_history_with_and_without_count() {
        assert_eq!(parse_line("history"), Ok(Some(Command::History(None))));
        assert_eq!(parse_line("history 5"), Ok(Some(Command::History(Some(5)))));
        assert_eq!(
            parse_line("history five"),
            Err(ParseError::BadCount("five".to_string()))
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(
            parse_line("bogus"),
            Err(ParseError::UnknownCommand("bogus".to_string()))
        );
        assert_eq!(
            parse_line("1 % 2"),
            Err(ParseError::UnknownCommand("1".to_string()))
        );
    }

    #[test]
    fn rejects_bad_operands() {
        assert_eq!(
            parse_line("one + 2"),
            Err(ParseError::BadOperand("one".to_string()))
        );
        // outside the i32 domain
        assert_eq!(
            parse_line("2147483648 + 0"),
            Err(ParseError::BadOperand("2147483648".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("1 + 2 + 3"), Err(ParseError::Malformed));
    }

    #[test]
    fn exit_aliases() {
        assert_eq!(parse_line("exit"), Ok(Some(Command::Exit)));
        assert_eq!(parse_line("quit"), Ok(Some(Command::Exit)));
    }
}
