use lox_scan::{Error, Scanner, Token};
use std::{
    env,
    fs::File,
    io::{self, BufRead, Write},
    process,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 74;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt().map_err(Error::from),
        2 => run_file(args[1].as_str()),
        _ => {
            eprintln!("Usage: lox-scan [script]");
            process::exit(EX_USAGE);
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        let code = match e.kind() {
            lox_scan::ErrorKind::Io(_) => EX_IOERR,
            _ => EX_DATAERR,
        };
        process::exit(code);
    }
}

/// Logging is opt-in through `RUST_LOG`, e.g. `RUST_LOG=lox_scan=trace`.
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_file(path: &str) -> lox_scan::Result<()> {
    let file = File::open(path)?;
    let tokens = Scanner::scan_reader(file)?;
    print_tokens(&tokens)?;
    Ok(())
}

fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();
        let num_bytes = stdin.lock().read_line(&mut buffer)?;
        if num_bytes == 0 { break };
        if buffer.trim().is_empty() { continue };

        match lox_scan::scan(buffer.as_str()) {
            Ok(tokens) => print_tokens(&tokens)?,
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for token in tokens {
        writeln!(stdout, "{}", token)?;
    }
    Ok(())
}
