use anyhow::Context;
use argh::FromArgs;
use minish::{Interpreter, LineSource};
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs)]
/// A minimal command-line interpreter.
struct Args {
    #[argh(positional)]
    /// script file to read commands from; reads standard input when omitted
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    match run(args) {
        Ok(status) => ExitCode::from(status.rem_euclid(256) as u8),
        Err(err) => {
            eprintln!("minish: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<i32> {
    let mut source = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            LineSource::from_reader(file)?
        }
        None if std::io::stdin().is_terminal() => LineSource::interactive()
            .map_err(|err| anyhow::anyhow!("cannot initialize line editor: {err}"))?,
        None => LineSource::from_reader(std::io::stdin().lock())?,
    };

    let mut interpreter = Interpreter::new();
    Ok(interpreter.run(&mut source))
}
