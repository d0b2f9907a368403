// main.rs

mod builtins;
mod completion;
mod repl;

fn main() -> anyhow::Result<()> {
    repl::start_repl()
}
