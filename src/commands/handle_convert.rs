use crate::cli::OutputArgs;
use crate::convert::convert_ip_range_to_nets;
use crate::error::AppError;
use crate::output::{OutputOptions, emit_output};

/// 単一範囲の変換と出力
pub async fn run_convert(begin: &str, end: &str, args: &OutputArgs) -> Result<(), AppError> {
    let nets = convert_ip_range_to_nets(begin, end)?;
    let source = format!("{} - {}", begin.trim(), end.trim());
    emit_output(&nets, &source, &OutputOptions::from(args)).await
}
