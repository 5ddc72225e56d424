use std::fs;

use clap::Parser;
use myc::run_program;

/// myc is the compiler front-end for My, a small statement language with
/// variable declarations, assignments, and a display builtin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells myc to treat the input as an inline script instead of a file
    /// path.
    #[arg(short, long)]
    script: bool,

    /// Dump mode lists the split source statements, bracketed by a separator
    /// line, before they are tokenized.
    #[arg(short, long)]
    dump_program: bool,

    /// Path to a My program, or the program text itself with --script.
    #[arg(default_value = "test.my")]
    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.script {
        args.contents
    } else {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    };

    run_program(&source, args.dump_program);
}
