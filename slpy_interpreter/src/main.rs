use std::env;
use std::fs;
use std::io;
use std::process;

enum Mode {
    Run,
    Pretty,
    Dump,
}

fn parse_args(args: &[String]) -> Option<(Mode, &str)> {
    match args {
        [_, path] => Some((Mode::Run, path.as_str())),
        [_, flag, path] if flag == "--pretty" => Some((Mode::Pretty, path.as_str())),
        [_, flag, path] if flag == "--dump" => Some((Mode::Dump, path.as_str())),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let (mode, file_path) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: {} [--pretty | --dump] <file>", args[0]);
            process::exit(2);
        }
    };

    let source = match fs::read_to_string(file_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", file_path, e);
            process::exit(1);
        }
    };

    let program = match slpy_parser::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parsing error: {}", e);
            process::exit(1);
        }
    };

    match mode {
        Mode::Run => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut input = stdin.lock();
            let mut output = stdout.lock();
            if let Err(e) = slpy_interpreter::interpreter::run(&program, &mut input, &mut output) {
                eprintln!("Runtime error: {}", e);
                process::exit(1);
            }
        }
        Mode::Pretty => print!("{}", program),
        Mode::Dump => print!("{}", program.dump_to_string()),
    }
}
