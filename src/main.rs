use bases_filter::cli::{self, CheckOptions, CheckResult, CliError};
use bases_filter::{FilterOptions, syntax_info};
use clap::{Parser as ClapParser, Subcommand};
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "bases-filter")]
#[command(about = "Check Bases filter expressions and print their syntax tree")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a filter expression
    Check {
        /// The filter expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only report whether the filter is valid
        #[arg(long)]
        syntax_only: bool,

        /// Maximum expression length in bytes
        #[arg(long)]
        max_length: Option<usize>,
    },

    /// Parse the `filter` field of a YAML view config
    Yaml {
        /// Path to the YAML file, or `-` for stdin
        path: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show operators, functions and examples
    Syntax {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            pretty,
            syntax_only,
            max_length,
        } => run_check(expression, pretty, syntax_only, max_length),
        Commands::Yaml { path, pretty } => run_yaml(&path, pretty),
        Commands::Syntax { json } => run_syntax(json),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_result(result: CheckResult) {
    match result {
        CheckResult::SyntaxValid => println!("Filter is valid"),
        CheckResult::Success(json) => println!("{}", json),
    }
}

fn run_check(
    expression: Option<String>,
    pretty: bool,
    syntax_only: bool,
    max_length: Option<usize>,
) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => Some(read_stdin()?.trim_end().to_string()),
        None => None,
    };

    let mut limits = FilterOptions::default();
    if let Some(max) = max_length {
        limits.max_expression_len = max;
    }

    let options = CheckOptions {
        expression,
        pretty,
        syntax_only,
        limits,
    };

    print_result(cli::execute_check(&options)?);
    Ok(())
}

fn run_yaml(path: &str, pretty: bool) -> Result<(), CliError> {
    let yaml = if path == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path)?
    };

    let options = CheckOptions {
        pretty,
        ..Default::default()
    };
    print_result(cli::execute_yaml(&yaml, &options)?);
    Ok(())
}

fn run_syntax(json: bool) -> Result<(), CliError> {
    let info = syntax_info();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", cli::render_syntax_help(&info));
    }
    Ok(())
}
