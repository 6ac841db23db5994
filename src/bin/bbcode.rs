//! Command-line interface for bbcode
//! This binary renders BBCode files to HTML and exposes the intermediate
//! pipeline stages for inspection.
//!
//! Usage:
//!   bbcode render `<path>`                      - Render a file (or - for stdin) to HTML
//!   bbcode tokens `<path>` [--format `<format>`]  - Dump the token stream
//!   bbcode ast `<path>`                         - Dump the resolved tree as JSON
//!   bbcode tags                               - List the supported tag vocabulary

use std::fs;
use std::io::Read;
use std::process;

use clap::{Arg, Command};

use bbcode::bbcode::lexing::tokenize;
use bbcode::bbcode::parsing::parse;
use bbcode::bbcode::tags::{Arity, BodyMode, RULES};
use bbcode::{render, RenderOptions};

fn main() {
    let matches = Command::new("bbcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting BBCode markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a BBCode file to sanitized HTML")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("ast")
                .about("Dump the resolved markup tree as JSON")
                .arg(path_arg()),
        )
        .subcommand(Command::new("tags").about("List the supported tag vocabulary"))
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            handle_render_command(path);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("ast", ast_matches)) => {
            let path = ast_matches.get_one::<String>("path").unwrap();
            handle_ast_command(path);
        }
        Some(("tags", _)) => {
            handle_tags_command();
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the BBCode file, or - for stdin")
        .required(true)
        .index(1)
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(error) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {error}");
            process::exit(1);
        }
        source
    } else {
        match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("Error reading {path}: {error}");
                process::exit(1);
            }
        }
    }
}

fn handle_render_command(path: &str) {
    let source = read_source(path);
    println!("{}", render(&source));
}

fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source);

    match format {
        "simple" => {
            for (token, span) in &tokens {
                println!("{:?} @ {}..{}", token, span.start, span.end);
            }
        }
        "json" => {
            let records: Vec<_> = tokens
                .iter()
                .map(|(token, span)| {
                    serde_json::json!({
                        "token": token,
                        "start": span.start,
                        "end": span.end,
                    })
                })
                .collect();
            match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("Error serializing tokens: {error}");
                    process::exit(1);
                }
            }
        }
        other => {
            eprintln!("Unknown format '{other}' (expected 'simple' or 'json')");
            process::exit(1);
        }
    }
}

fn handle_ast_command(path: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source);
    let nodes = parse(&source, &tokens, RenderOptions::default().max_depth);
    match serde_json::to_string_pretty(&nodes) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            eprintln!("Error serializing tree: {error}");
            process::exit(1);
        }
    }
}

fn handle_tags_command() {
    for rule in &RULES {
        let arity = match rule.arity {
            Arity::None => "",
            Arity::Target => "=TARGET",
        };
        let body = match rule.body {
            BodyMode::Nested => "nested",
            BodyMode::Opaque => "opaque",
        };
        println!("[{name}{arity}]...[/{name}]  ({body})", name = rule.name);
    }
    println!("[br]  (line break marker)");
}
