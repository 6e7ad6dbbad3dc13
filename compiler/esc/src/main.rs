//! The `es` command-line interface.

use esc::commands::{explain_error, lex_file, parse_file, parse_run_options, run_file};

fn main() {
    esc::tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2).filter(|arg| !arg.starts_with('-')) else {
                eprintln!("Usage: es run <file.es> [options]");
                print_run_options();
                std::process::exit(1);
            };
            let options = match parse_run_options(&args[3..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    print_run_options();
                    std::process::exit(1);
                }
            };
            run_file(path, &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: es parse <file.es>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: es lex <file.es>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("es {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: es explain <ERROR_CODE>");
                eprintln!("Example: es explain E6001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("es"))
            {
                match parse_run_options(&args[2..]) {
                    Ok(options) => run_file(command, &options),
                    Err(message) => {
                        eprintln!("error: {message}");
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_run_options() {
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --steps-per-tick=N  Steps per scheduler tick (default: 10000)");
    eprintln!("  --tick-rate=HZ      Ticks per second, 0 for no pacing (default: 30)");
    eprintln!("  --strict-arity      Reject calls with the wrong number of arguments");
    eprintln!("  --no-prelude        Do not load the standard prelude");
}

fn print_usage() {
    println!("EScript interpreter");
    println!();
    println!("Usage: es <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.es>        Run a program");
    println!("  parse <file.es>      Parse and print the term tree");
    println!("  lex <file.es>        Tokenize and print tokens");
    println!("  explain <code>       Explain an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --steps-per-tick=N  Steps per scheduler tick (default: 10000)");
    println!("  --tick-rate=HZ      Ticks per second, 0 for no pacing (default: 30)");
    println!("  --strict-arity      Reject calls with the wrong number of arguments");
    println!("  --no-prelude        Do not load the standard prelude");
    println!();
    println!("Logging:");
    println!("  ES_LOG=es_eval=debug es run main.es");
    println!();
    println!("Examples:");
    println!("  es run main.es");
    println!("  es run main.es --tick-rate=0     # run unpaced");
    println!("  es parse main.es");
    println!("  es explain E6002");
}
