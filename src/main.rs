use std::{
    fs,
    io::{self, Cursor},
    process::ExitCode,
};

use clap::Parser;
use smartcalc::repl::Repl;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// smartcalc is an interactive integer calculator with variables.
///
/// Without arguments it reads one expression, assignment or command per line
/// from standard input. Set `RUST_LOG=smartcalc=debug` for diagnostics on
/// standard error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the path of a file with one line per input.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// A line to evaluate instead of reading standard input.
    contents: Option<String>,
}

fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match (args.file, args.contents) {
        (true, Some(path)) => match fs::read_to_string(&path) {
            Ok(script) => Some(script),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        },
        (_, contents) => contents,
    };

    let mut repl = Repl::new();
    let stdout = io::stdout().lock();
    let result = match script {
        Some(script) => repl.run(Cursor::new(script), stdout),
        None => repl.run(io::stdin().lock(), stdout),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
