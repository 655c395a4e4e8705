use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use arithmo::{
    config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT},
    error::InterpreterError,
    interpreter::{lexer::tokenize, parser::core::parse_with_config},
    run_with_config,
};
use clap::Parser;
use miette::{IntoDiagnostic, LabeledSpan, WrapErr};
use tracing_subscriber::EnvFilter;

/// arithmo evaluates arithmetic expressions such as `2 ^ 3 ^ 2` or
/// `(1 + 2) / 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of a file instead of a single
    /// expression.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the token stream of each expression before its result.
    #[arg(long)]
    tokens: bool,

    /// Prints the fully parenthesized syntax tree of each expression before
    /// its result.
    #[arg(long)]
    ast: bool,

    /// How deeply an expression may nest before it is rejected.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How many levels of chained operations an expression may contain.
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: usize,

    /// The expression to evaluate. Without it (and without `--file`), arithmo
    /// reads expressions from standard input, one per line.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> miette::Result<ExitCode> {
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();
    let config = Config::default().with_max_depth(args.max_depth)
                                  .with_max_height(args.max_height);

    if let Some(expression) = &args.expression {
        return Ok(exit_code(evaluate_line(expression, &args, &config)));
    }

    if let Some(path) = &args.file {
        let script =
            fs::read_to_string(path).into_diagnostic()
                                    .wrap_err_with(|| {
                                        format!("Failed to read the input file '{}'",
                                                path.display())
                                    })?;

        let mut all_ok = true;
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            all_ok &= evaluate_line(line, &args, &config);
        }
        return Ok(exit_code(all_ok));
    }

    repl(&args, &config)?;
    Ok(ExitCode::SUCCESS)
}

/// Reads one expression per line until end of input. Errors are reported
/// and the session continues.
fn repl(args: &Args, config: &Config) -> miette::Result<()> {
    let mut lines = io::stdin().lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }

        evaluate_line(&line, args, config);
    }
}

/// Evaluates one expression and prints its value or a labeled error.
/// Returns `false` if the expression failed.
fn evaluate_line(source: &str, args: &Args, config: &Config) -> bool {
    if args.tokens
       && let Ok(tokens) = tokenize(source)
    {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    }

    if args.ast
       && let Ok(tokens) = tokenize(source)
       && let Ok(expr) = parse_with_config(tokens, config)
    {
        println!("{expr}");
    }

    match run_with_config(source, config) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{:?}", report(source, &e));
            false
        },
    }
}

fn report(source: &str, error: &InterpreterError) -> miette::Report {
    miette::miette!(labels = vec![LabeledSpan::at(error.span(), "here")], "{error}")
        .with_source_code(source.to_string())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
