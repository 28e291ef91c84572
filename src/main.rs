use clap::{Parser as ClapParser, Subcommand};
use slate_lang::cli::{self, AnalyzeOptions, CheckResult, CliError, FormatOptions, RunOptions};
use slate_lang::io::{ConsoleInput, ConsoleOutput};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "slate")]
#[command(about = "Slate - A small statically typed scripting language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program
    Run {
        /// Source file ('-' or omitted reads stdin)
        file: Option<PathBuf>,

        /// Language version to run under
        #[arg(long, default_value = "1.1.0")]
        lang_version: String,
    },

    /// Only validate syntax, don't execute
    Check {
        /// Source file ('-' or omitted reads stdin)
        file: Option<PathBuf>,
    },

    /// Print a program reformatted with a style config
    Format {
        /// Source file ('-' or omitted reads stdin)
        file: Option<PathBuf>,

        /// JSON style config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Report style rule violations
    Analyze {
        /// Source file ('-' or omitted reads stdin)
        file: Option<PathBuf>,

        /// JSON rule config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Language version the rules apply to
        #[arg(long, default_value = "1.1.0")]
        lang_version: String,
    },

    /// Print the syntax tree as JSON
    Ast {
        /// Source file ('-' or omitted reads stdin)
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file, lang_version } => run_program(file, lang_version),
        Commands::Check { file } => read_source(file).and_then(|source| {
            let CheckResult::SyntaxValid { .. } = cli::execute_check(&source)?;
            println!("Syntax is valid");
            Ok(())
        }),
        Commands::Format { file, config } => read_source(file).and_then(|source| {
            let formatted = cli::execute_format(&FormatOptions { source, config })?;
            print!("{}", formatted);
            Ok(())
        }),
        Commands::Analyze {
            file,
            config,
            lang_version,
        } => read_source(file).and_then(|source| {
            let options = AnalyzeOptions {
                source,
                config,
                lang_version: Some(lang_version),
            };
            let diagnostics = cli::execute_analyze(&options)?;
            for diagnostic in &diagnostics {
                println!("{}", diagnostic);
            }
            if diagnostics.is_empty() {
                Ok(())
            } else {
                Err(CliError::Diagnostics(diagnostics.len()))
            }
        }),
        Commands::Ast { file, pretty } => read_source(file).and_then(|source| {
            println!("{}", cli::execute_ast(&source, pretty)?);
            Ok(())
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, and only when `RUST_LOG` asks for them.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    if std::env::var("RUST_LOG").is_ok() {
        fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn run_program(file: Option<PathBuf>, lang_version: String) -> Result<(), CliError> {
    let options = RunOptions {
        source: read_source(file)?,
        lang_version: Some(lang_version),
    };
    cli::execute_run(&options, &mut ConsoleOutput, &mut ConsoleInput)?;
    Ok(())
}

fn read_source(file: Option<PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        Some(_) => read_stdin(),
        None if !atty::is(atty::Stream::Stdin) => read_stdin(),
        None => Err(CliError::NoInput),
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
