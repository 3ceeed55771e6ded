//! Command-line harness for the TEA2 block cipher.
//!
//! Replays the reference scenarios or transforms a single block given as hex.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use tea2::{Block, Key};

mod demo;

/// Command-line arguments for the TEA2 program.
#[derive(Parser, Debug)]
#[command(
    name = "tea2",
    version,
    about = "TEA2 block cipher: 128-bit block, 256-bit key, 128 rounds"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt and decrypt the three reference blocks and print the transcript.
    Demo,
    /// Encrypt one block.
    Encrypt(BlockArgs),
    /// Decrypt one block.
    Decrypt(BlockArgs),
}

#[derive(Args, Debug)]
struct BlockArgs {
    /// Key for the cipher.
    #[arg(short, long, help = "256-bit key as 64 hex digits (whitespace allowed)")]
    key: String,

    /// Block to transform.
    #[arg(short, long, help = "128-bit block as 32 hex digits (whitespace allowed)")]
    block: String,
}

/// Enum representing the direction of a single-block transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

/// Parses the hex arguments and applies one transform.
fn transform(mode: OperationMode, args: &BlockArgs) -> tea2::Result<Block> {
    let key: Key = args.key.parse()?;
    let block: Block = args.block.parse()?;
    debug!("{:?} {}", mode, block);

    Ok(match mode {
        OperationMode::Encrypt => tea2::encrypt(block, &key),
        OperationMode::Decrypt => tea2::decrypt(block, &key),
    })
}

fn run(command: &Command) -> tea2::Result<String> {
    match command {
        Command::Demo => {
            info!("running {} reference scenarios", demo::SCENARIOS.len());
            Ok(demo::transcript())
        }
        Command::Encrypt(args) => Ok(format!("{}\n", transform(OperationMode::Encrypt, args)?)),
        Command::Decrypt(args) => Ok(format!("{}\n", transform(OperationMode::Decrypt, args)?)),
    }
}

/// The single line written to stderr when a command fails.
fn failure_message(err: &tea2::Tea2Error) -> String {
    format!("error: {}", err)
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    match run(&cli.command) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
