use std::{env, fs::read_to_string, path::Path, process::exit, time::Instant};

use log::debug;
use vsharp::{
    ast::printer::print_ast,
    lexer::lexer::{tokenize, tokenize_all},
    parser::parser::parse,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <file> [flags]", args[0]);
        exit(1);
    }

    match args[1].as_str() {
        "--help" | "-h" => print_help(),
        "--version" | "-v" => print_version(),
        "lsp" => {
            eprintln!("The language server is not available yet");
            exit(1);
        }
        _ => compile_file(&args[1], &args[2..]),
    }
}

fn print_help() {
    println!("Usage: vsharp <file> [flags]");
    println!();
    println!("Flags:");
    println!("  --emit-ast      print the parsed syntax tree");
    println!("  --emit-tokens   print the token stream and stop");
    println!();
    println!("Commands:");
    println!("  lsp             start the language server (not available yet)");
    println!("  --help, -h      show this help");
    println!("  --version, -v   show the compiler version");
}

fn print_version() {
    println!("VSharp Compiler v{}", env!("CARGO_PKG_VERSION"));
}

fn compile_file(file_path: &str, flags: &[String]) {
    // A missing file is fatal before the lexer ever sees anything; empty
    // content must never stand in for an absent file.
    if !Path::new(file_path).exists() {
        eprintln!("File does not exist: {}", file_path);
        exit(1);
    }

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap_or(file_path)
    } else {
        file_path
    };

    if flags.iter().any(|flag| flag == "--emit-tokens") {
        match tokenize_all(source, Some(String::from(file_name))) {
            Ok(tokens) => {
                for token in tokens {
                    token.debug();
                }
            }
            Err(error) => {
                eprintln!("Parser Error: {}", error);
                exit(1);
            }
        }
        return;
    }

    let start = Instant::now();

    let stream = match tokenize(source, Some(String::from(file_name))) {
        Ok(stream) => stream,
        Err(error) => {
            eprintln!("Parser Error: {}", error);
            exit(1);
        }
    };

    let ast = match parse(stream) {
        Ok(ast) => ast,
        Err(error) => {
            eprintln!("Parser Error: {}", error);
            exit(1);
        }
    };

    debug!("Parsed {} in {:?}", file_name, start.elapsed());

    if flags.iter().any(|flag| flag == "--emit-ast") {
        print_ast(&ast);
    }
}
