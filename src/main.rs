use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use log::LevelFilter;
use lumen::{error::Failure, get_result, render_ast, run_program};
use simple_logger::SimpleLogger;

/// Exit code for scan and parse errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit code for runtime errors.
const EXIT_SOFTWARE_ERROR: u8 = 70;
/// Exit code for an unreadable input file.
const EXIT_IO_ERROR: u8 = 74;

/// lumen evaluates expressions: arithmetic, comparisons, string concatenation
/// and the ternary conditional. Starts an interactive prompt when no input is
/// given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lumen to read the input from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the parenthesized syntax tree instead of evaluating.
    #[arg(short, long, conflicts_with = "program")]
    ast: bool,

    /// Treats the input as `print` and expression statements separated by
    /// `;`.
    #[arg(short, long)]
    program: bool,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The source text, or a path when `--file` is given.
    contents: Option<String>,
}

impl Args {
    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level()).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let Some(contents) = &args.contents else {
        run_prompt(&args);
        return ExitCode::SUCCESS;
    };

    let source = if args.file {
        log::info!("reading {contents}");
        match fs::read_to_string(contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::from(EXIT_IO_ERROR);
            },
        }
    } else {
        contents.clone()
    };

    match run(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            report(&failure);
            if failure.had_error() {
                ExitCode::from(EXIT_DATA_ERROR)
            } else {
                ExitCode::from(EXIT_SOFTWARE_ERROR)
            }
        },
    }
}

/// Runs one input in the mode selected by `args`, printing results to stdout.
fn run(args: &Args, source: &str) -> Result<(), Failure> {
    if args.ast {
        println!("{}", render_ast(source)?);
    } else if args.program {
        for line in run_program(source)? {
            println!("{line}");
        }
    } else {
        println!("{}", get_result(source)?);
    }

    Ok(())
}

/// Prints the lines produced before a failure, then its diagnostics.
fn report(failure: &Failure) {
    for line in &failure.output {
        println!("{line}");
    }

    eprintln!("{failure}");
}

/// Reads lines from stdin and runs each one independently until end of input.
fn run_prompt(args: &Args) {
    log::info!("starting interactive prompt");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            log::warn!("failed to flush prompt: {e}");
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }

        if line.trim().is_empty() {
            continue;
        }

        if let Err(failure) = run(args, &line) {
            report(&failure);
        }
    }
}
