use crate::command::{parse_command, Command};
use crate::environment::Environment;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

static PROMPT: &str = ">> ";

pub fn start(env: &mut Environment) {
    let stdin = io::stdin();
    if let Err(err) = run(env, stdin.lock(), io::stdout(), Some(PROMPT)) {
        warn!(%err, "repl stopped");
    }
}

/// Runs commands from `input` until it is exhausted, writing results to `output`.
pub fn run<R: BufRead, W: Write>(
    env: &mut Environment,
    mut input: R,
    mut output: W,
    prompt: Option<&str>,
) -> io::Result<()> {
    loop {
        if let Some(prompt) = prompt {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Err(err) => {
                debug!(line = line.trim_end(), %err, "parse error");
                writeln!(output, "\t{}", err)?;
            }
            Ok(None) => {}
            Ok(Some(command)) => execute(env, command, &mut output)?,
        }
    }
}

fn execute<W: Write>(env: &mut Environment, command: Command, output: &mut W) -> io::Result<()> {
    let result = match command {
        Command::Assign { name, value } => {
            env.associate(&name, value);
            Ok(None)
        }
        Command::Lookup { name } => env.get_value(&name).map(|value| Some(value.to_string())),
        Command::Show => Ok(Some(env.to_text())),
    };

    match result {
        Ok(Some(text)) => writeln!(output, "{}", text),
        Ok(None) => Ok(()),
        Err(err) => writeln!(output, "ERROR: {}", err),
    }
}
