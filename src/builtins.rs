// builtins.rs

use calc_shell::History;

const DEFAULT_HISTORY_COUNT: usize = 10;

pub fn print_history(log: &dyn History, count: Option<usize>) {
    let entries = log.get_last_operations(count.unwrap_or(DEFAULT_HISTORY_COUNT));
    if entries.is_empty() {
        println!("(no operations yet)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{:>4}  {}", i + 1, entry);
    }
}

pub fn print_help() {
    println!("commands:");
    println!("  <a> <op> <b>   evaluate, e.g. 3 * 4 (op is + - * /)");
    println!("  <op> <a> <b>   word form: add, sub, mul, div");
    println!("  history [n]    show the last n operations (default {DEFAULT_HISTORY_COUNT})");
    println!("  help           show this message");
    println!("  exit           leave the calculator");
}
