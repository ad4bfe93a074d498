use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;

use pseudogen::{CasePolicy, ProgramRenderer, RenderConfig, parse_program};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("pseudogen")
        .about("Convert a parsed program syntax tree (esprima JSON) to readable pseudocode")
        .arg(
            Arg::new("input")
                .help("Input JSON file holding the parsed syntax tree")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("4")
                .help("Indentation width in spaces"),
        )
        .arg(
            Arg::new("case")
                .long("case")
                .default_value("none")
                .help("Identifier casing policy: none, lowercase, uppercase or capitalize"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .default_value(" + ")
                .help("Token joining the arguments of an output line"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let config = RenderConfig {
        indent_width: *matches.get_one::<u64>("indent").unwrap() as usize,
        case: matches.get_one::<String>("case").unwrap().parse::<CasePolicy>()?,
        arg_separator: matches.get_one::<String>("separator").unwrap().clone(),
    };

    let json_content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file))?;
    let program = parse_program(&json_content)?;

    let renderer = ProgramRenderer;
    println!("{}", renderer.render(&program, &config));

    Ok(())
}
