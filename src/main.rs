use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use rox::ast_printer::AstPrinter;
use rox::error::StderrReporter;
use rox::lox::{Lox, EXIT_STATIC_ERROR};
use rox::parser::Parser;
use rox::scanner::Scanner;
use rox::stmt::Stmt;

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    /// Without a subcommand an interactive prompt is started
    #[command(subcommand)]
    commands: Option<Commands>,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print one JSON object per token
        #[arg(long)]
        json: bool,
    },

    /// Parses input from a file and prints the syntax tree of every statement
    Parse {
        filename: PathBuf,

        /// Print expression statements in reverse polish notation
        #[arg(long)]
        rpn: bool,
    },

    /// Runs input from a file as a Lox program
    Run { filename: PathBuf },
}

/// Reads the contents of a file into a String
fn read_file(filename: &Path) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // `[module:line] - message`, with the crate prefix stripped.
    Builder::new()
        .format(|buf, record| {
            let module_path = record.module_path().unwrap_or("<unnamed>");
            let module = module_path.strip_prefix("rox::").unwrap_or(module_path);
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn tokenize(filename: &Path, json: bool) -> Result<i32> {
    info!("Running Tokenize subcommand");
    let source = read_file(filename)?;
    let mut tokenized = true;

    for result in Scanner::new(&source) {
        match result {
            Ok(token) => {
                debug!("Scanned token: {}", token);

                if json {
                    let line = serde_json::to_string(&token).context("Failed to encode token")?;
                    println!("{}", line);
                } else {
                    println!("{}", token);
                }
            }

            Err(e) => {
                tokenized = false;
                eprintln!("{}", e);
            }
        }
    }

    if !tokenized {
        debug!("Tokenization failed, exiting with code 65");
        return Ok(EXIT_STATIC_ERROR);
    }

    info!("Tokenization completed successfully");
    Ok(0)
}

fn parse(filename: &Path, rpn: bool) -> Result<i32> {
    info!("Running Parse subcommand");
    let source = read_file(filename)?;

    let (tokens, lex_errors) = Scanner::new(&source).scan_tokens();
    let (statements, parse_errors) = Parser::new(&tokens).parse();

    if !lex_errors.is_empty() || !parse_errors.is_empty() {
        for e in lex_errors.iter().chain(&parse_errors) {
            eprintln!("{}", e);
        }
        return Ok(EXIT_STATIC_ERROR);
    }

    for stmt in &statements {
        let printed = match stmt {
            Stmt::Expression(expr) if rpn => AstPrinter::rpn(expr),
            _ => AstPrinter::print_stmt(stmt),
        };

        debug!("AST: {}", printed);
        println!("{}", printed);
    }

    info!("Parse subcommand completed");
    Ok(0)
}

fn run_file(filename: &Path) -> Result<i32> {
    info!("Running Run subcommand");
    let source = read_file(filename)?;

    let mut lox = Lox::new(StderrReporter);
    lox.run(&source);

    Ok(lox.exit_code())
}

fn run_prompt() -> Result<i32> {
    info!("Starting interactive prompt");

    let mut lox = Lox::new(StderrReporter);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            println!();
            break;
        }

        lox.run(&line);
        lox.reset_error();
    }

    info!("Prompt closed");
    Ok(0)
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    if args.log {
        init_logger()?;
    } else {
        // Installed so that `log` calls have somewhere to go.
        Builder::new().filter_level(log::LevelFilter::Off).init();
    }

    info!("CLI arguments: {:?}", args);

    let code = match &args.commands {
        Some(Commands::Tokenize { filename, json }) => tokenize(filename, *json)?,
        Some(Commands::Parse { filename, rpn }) => parse(filename, *rpn)?,
        Some(Commands::Run { filename }) => run_file(filename)?,
        None => run_prompt()?,
    };

    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
