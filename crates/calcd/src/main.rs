//! calcd CLI
//!
//! Serves `/calc` over HTTP, or evaluates a single payload.

use calc_eval::DEFAULT_MAX_DEPTH;
use calcd::commands::{run_eval, run_serve};
use calcd::config::{parse_max_depth, ADDR_ENV, MAX_DEPTH_ENV};
use calcd::telemetry::init_tracing;
use calcd::{ServerConfig, DEFAULT_ADDR};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match args.get(1).map(String::as_str) {
        None => run_serve(config),
        Some("serve") => serve_with_flags(config, &args[2..]),
        // Flags without a subcommand mean `serve`
        Some(flag) if flag.starts_with("--") && flag != "--help" => {
            serve_with_flags(config, &args[1..]);
        }
        Some("eval") => {
            let mut eval = config.eval;
            let mut path = None;

            for arg in args.iter().skip(2) {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    match parse_max_depth(depth) {
                        Ok(max_depth) => eval.max_depth = max_depth,
                        Err(err) => {
                            eprintln!("error: {err}");
                            std::process::exit(1);
                        }
                    }
                } else if (arg == "-" || !arg.starts_with('-')) && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: calcd eval <file | -> [--max-depth=<n|none>]");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing payload path");
                eprintln!("Usage: calcd eval <file | -> [--max-depth=<n|none>]");
                std::process::exit(1);
            };
            run_eval(path, eval);
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn serve_with_flags(mut config: ServerConfig, flags: &[String]) {
    for flag in flags {
        if let Err(err) = config.apply_flag(flag) {
            eprintln!("error: {err}");
            eprintln!("Usage: calcd serve [--addr=<host:port>] [--max-depth=<n|none>]");
            std::process::exit(1);
        }
    }
    run_serve(config);
}

fn print_usage() {
    println!("calcd - evaluate nested JSON arithmetic expressions");
    println!();
    println!("Usage: calcd [command] [options]");
    println!();
    println!("Commands:");
    println!("  serve              Serve POST /calc (default)");
    println!("  eval <file | ->    Evaluate one payload and print the result");
    println!("  help               Show this message");
    println!();
    println!("Options:");
    println!("  --addr=<host:port>     Listen address (default: {DEFAULT_ADDR})");
    println!("  --max-depth=<n|none>   Maximum node nesting (default: {DEFAULT_MAX_DEPTH})");
    println!();
    println!("Environment:");
    println!("  {ADDR_ENV}, {MAX_DEPTH_ENV}   Same as the options above");
    println!("  RUST_LOG                      Log filter (default: info)");
}
