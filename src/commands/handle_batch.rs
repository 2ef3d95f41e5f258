use crate::batch::{aggregate_results, convert_ranges, parse_range_lines};
use crate::cli::OutputArgs;
use crate::error::AppError;
use crate::output::{OutputOptions, emit_output};
use std::path::Path;
use tokio::fs;

/// ファイルに列挙された範囲をまとめて変換し出力する
pub async fn run_batch(
    input: &Path,
    aggregate: bool,
    concurrency: usize,
    args: &OutputArgs,
) -> Result<(), AppError> {
    let text = fs::read_to_string(input).await?;
    let ranges = parse_range_lines(&text)?;
    if ranges.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "no ranges found in {}",
            input.display()
        )));
    }

    let results = convert_ranges(&ranges, concurrency).await?;
    let nets = if aggregate {
        let merged = aggregate_results(&results);
        log::debug!(
            "Aggregated {} block(s) into {}",
            results.iter().map(Vec::len).sum::<usize>(),
            merged.len()
        );
        merged
    } else {
        results.into_iter().flatten().collect()
    };

    let source = input.display().to_string();
    emit_output(&nets, &source, &OutputOptions::from(args)).await
}
