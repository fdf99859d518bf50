use std::fs;

use clap::Parser;
use qlisp::{eval_source,
            interpreter::{builtin, env::Env}};
use rustyline::error::ReadlineError;

/// qlisp is a small interactive evaluator for a prefix, Lisp-like
/// expression language with quoted-list literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells qlisp to evaluate a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate (or, with --file, a path). When omitted,
    /// qlisp starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut env = Env::new();
    builtin::add_builtins(&mut env);

    let Some(contents) = args.contents else {
        interactive_loop(&mut env);
        return;
    };

    let source = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    eval_and_print(&mut env, &source);
}

/// Evaluates one piece of input and prints the outcome.
///
/// Results go to stdout, one per line; parse errors go to stderr. Neither
/// ends the session.
fn eval_and_print(env: &mut Env, source: &str) {
    match eval_source(env, source) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}

/// Runs the read-eval-print loop until the user exits.
fn interactive_loop(env: &mut Env) {
    println!("qlisp {}", env!("CARGO_PKG_VERSION"));
    println!("Press CTRL+C to exit\n");

    let mut rl = rustyline::Editor::<()>::new();

    loop {
        match rl.readline("qlisp> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                eval_and_print(env, &line);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}
