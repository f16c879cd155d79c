use anyhow::{Result, anyhow};
use argh::FromArgs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use seqsh::env::Environment;
use seqsh::interpret_line;
use std::io;

#[derive(FromArgs)]
/// Interactive command interpreter with `;`, `&&` and `||` sequencing.
struct Cli {
    #[argh(option, short = 'c')]
    /// interpret a single command line and exit instead of prompting
    command: Option<String>,
}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();
    match cli.command {
        Some(line) => {
            let env = Environment::capture();
            let status = interpret_line(&line, &env, &mut io::stdout())?;
            std::process::exit(status.code())
        }
        None => repl(),
    }
}

/// The read-eval loop: prompt, read, interpret, repeat.
///
/// End of input is the normal shutdown path. A read error and an
/// unrecoverable launch fault both surface as `Err`, turning into a failure
/// exit code.
fn repl() -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        // Captured fresh every iteration so the prompt and the search path
        // track the live environment.
        let env = Environment::capture();
        match editor.readline(&env.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                interpret_line(&line, &env, &mut io::stdout())?;
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                return Ok(());
            }
            Err(err) => return Err(anyhow!("could not retrieve input: {err}")),
        }
    }
}
