// repl.rs

use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::builtins::{print_help, print_history};
use crate::completion::CommandCompleter;
use calc_shell::parser::{parse_line, Command, Op};
use calc_shell::{CalcError, InMemoryHistory, SimpleCalculator};

pub fn start_repl() -> anyhow::Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let mut log = InMemoryHistory::new();
    let mut calc = SimpleCalculator::new(&mut log);

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // rustyline's line recall is separate from the operation log
                let _ = rl.add_history_entry(trimmed);
                match parse_line(trimmed) {
                    Ok(Some(Command::Eval { a, op, b })) => match evaluate(&mut calc, a, op, b) {
                        Ok(result) => println!("{result}"),
                        Err(err) => eprintln!("{err}"),
                    },
                    Ok(Some(Command::History(count))) => print_history(calc.history(), count),
                    Ok(Some(Command::Help)) => print_help(),
                    Ok(Some(Command::Exit)) => break,
                    Ok(None) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}

fn evaluate(calc: &mut SimpleCalculator<'_>, a: i32, op: Op, b: i32) -> Result<i32, CalcError> {
    match op {
        Op::Add => calc.add(a, b),
        Op::Sub => calc.subtract(a, b),
        Op::Mul => calc.multiply(a, b),
        Op::Div => calc.divide(a, b),
    }
}
