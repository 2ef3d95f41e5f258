use clap::Parser;
use ip_range_cidr::cli::{Cli, Command};
use ip_range_cidr::commands::{handle_batch::run_batch, handle_convert::run_convert};
use ip_range_cidr::error::AppError;
use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_logger(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// ロガー初期化。RUST_LOG が設定されていればそちらを優先する
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// アプリケーションのメインロジック
async fn run(args: Cli) -> Result<(), AppError> {
    match &args.command {
        Command::Convert { begin, end, output } => run_convert(begin, end, output).await,
        Command::Batch {
            input,
            aggregate,
            concurrency,
            output,
        } => run_batch(input, *aggregate, *concurrency, output).await,
    }
}
