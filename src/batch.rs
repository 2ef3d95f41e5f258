use crate::convert::convert_ip_range_to_nets;
use crate::error::AppError;
use futures::future::join_all;
use ipnet::IpNet;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// バッチ入力の1行分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    pub line: usize,
    pub begin: String,
    pub end: String,
}

/// 1行を (begin, end) に分解する。
/// 区切りは空白、"-"、"," のいずれか。
fn split_range_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|s| !s.is_empty());
    let begin = parts.next()?;
    let end = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((begin, end))
}

/// 範囲リストのテキストをパースする。空行と "#" で始まる行は無視する。
pub fn parse_range_lines(text: &str) -> Result<Vec<RangeSpec>, AppError> {
    let mut ranges = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (begin, end) = split_range_line(line).ok_or_else(|| {
            AppError::ParseError(format!(
                "line {}: expected '<begin> <end>' but got '{}'",
                idx + 1,
                line
            ))
        })?;
        ranges.push(RangeSpec {
            line: idx + 1,
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    Ok(ranges)
}

/// 複数の範囲を並列に変換する。結果は入力順。
/// 1件でも失敗した場合は全体をエラーとする。
pub async fn convert_ranges(
    ranges: &[RangeSpec],
    concurrency: usize,
) -> Result<Vec<Vec<IpNet>>, AppError> {
    let max_concurrent = if concurrency == 0 { 1 } else { concurrency };
    let semaphore = Arc::new(Semaphore::new(max_concurrent));

    let mut handles = Vec::with_capacity(ranges.len());
    for spec in ranges.iter().cloned() {
        let sem_c = semaphore.clone();
        handles.push(tokio::spawn(async move {
            let _permit = sem_c.acquire_owned().await?;
            convert_ip_range_to_nets(&spec.begin, &spec.end).map_err(|e| AppError::BatchLine {
                line: spec.line,
                source: Box::new(e),
            })
        }));
    }

    let mut results = Vec::with_capacity(ranges.len());
    for res in join_all(handles).await {
        results.push(res??);
    }

    log::info!("Converted {} range(s)", results.len());
    Ok(results)
}

/// 変換結果をまとめて隣接・包含するブロックを集約する(IPv4, IPv6 の順)
pub fn aggregate_results(results: &[Vec<IpNet>]) -> Vec<IpNet> {
    let (v4, v6): (Vec<IpNet>, Vec<IpNet>) = results
        .iter()
        .flatten()
        .copied()
        .partition(|net| matches!(net, IpNet::V4(_)));

    let mut merged = IpNet::aggregate(&v4);
    merged.extend(IpNet::aggregate(&v6));
    merged
}
