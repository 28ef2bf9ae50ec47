use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use log::info;
use monkey::{
    ast::ast::Node,
    display_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::{Parser, ParserConfig, Recovery, StatementValues},
};

const USAGE: &str = "usage: monkey [--tokens] [--parse-values] [--resync] [FILE]";

fn main() -> ExitCode {
    env_logger::init();

    let mut config = ParserConfig::default();
    let mut dump_tokens = false;
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => dump_tokens = true,
            "--parse-values" => config.statement_values = StatementValues::Parse,
            "--resync" => config.recovery = Recovery::SkipToSemicolon,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            flag if flag.starts_with("--") => {
                eprintln!("unknown option `{}`\n{}", flag, USAGE);
                return ExitCode::FAILURE;
            }
            path => file_path = Some(PathBuf::from(path)),
        }
    }

    let (source, file_name) = match read_source(file_path) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("failed to read source: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if dump_tokens {
        for token in tokenize(source.clone(), file_name.clone()) {
            token.debug();
        }
    }

    let start = Instant::now();

    let mut parser = Parser::with_config(Lexer::new(source.clone(), file_name), config);
    let program = parser.parse_program();

    info!("Parsed in {:?}", start.elapsed());

    for error in parser.errors() {
        display_error(error, &source);
    }

    println!("{}", program.to_code());

    if parser.errors().is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the program from `path`, or from standard input when there is none.
fn read_source(path: Option<PathBuf>) -> io::Result<(String, Option<String>)> {
    match path {
        Some(path) => {
            let contents = read_to_string(&path)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());

            Ok((contents, file_name))
        }
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;

            Ok((contents, None))
        }
    }
}
