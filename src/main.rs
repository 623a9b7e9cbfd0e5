use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use numex::{
    eval_source,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse},
};

/// numex is an interactive calculator for numeric expressions with variables
/// and a handful of native functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit.
    #[arg(short, long)]
    eval: Option<String>,

    /// Print the parsed syntax tree instead of evaluating.
    #[arg(long)]
    dump_ast: bool,

    /// A script file evaluated line by line in one session.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    if let Some(line) = args.eval {
        if run_line(&line, &mut context, args.dump_ast).is_err() {
            std::process::exit(1);
        }

        return;
    }

    if let Some(path) = args.script {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });

        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            if run_line(line, &mut context, args.dump_ast).is_err() {
                std::process::exit(1);
            }
        }

        return;
    }

    repl(&mut context, args.dump_ast);
}

/// Reads lines from standard input until end of file, evaluating each one.
///
/// A failed line prints its error and the session continues; the bindings
/// made before the failure survive for the next line.
fn repl(context: &mut Context, dump_ast: bool) {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(error) => {
                eprintln!("Failed to read input: {error}");
                break;
            },
        }

        let _ = run_line(line.trim_end(), context, dump_ast);
    }
}

/// Evaluates (or dumps) one line and reports the outcome on the terminal.
fn run_line(source: &str, context: &mut Context, dump_ast: bool) -> Result<(), ()> {
    if dump_ast {
        return dump_tree(source);
    }

    match eval_source(source, context) {
        Ok(Some(value)) => {
            println!("{value}");
            Ok(())
        },
        Ok(None) => Ok(()),
        Err(error) => {
            eprintln!("{error}");
            Err(())
        },
    }
}

/// Tokenizes and parses one line, pretty-printing the tree instead of
/// evaluating it.
fn dump_tree(source: &str) -> Result<(), ()> {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            return Err(());
        },
    };

    match parse(&tokens) {
        Ok(Some(expr)) => println!("{expr:#?}"),
        Ok(None) => {},
        Err(error) => {
            eprintln!("{error}");
            return Err(());
        },
    }

    Ok(())
}
