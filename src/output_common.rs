use crate::common::WriteMode;
use crate::constants::MAX_IDENTIFIER_LEN;
use crate::error::AppError;
use ipnet::IpNet;
use serde::Serialize;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// 汎用ヘッダー生成
pub fn make_header(now_str: &str, source: &str) -> String {
    format!("# Generated at: {}\n# Source: {}\n\n", now_str, source)
}

/// nftables の define 名として使える形に整える。
/// 英数字とアンダースコアのみ残し、空になった場合は "UNKNOWN"。
pub fn sanitize_identifier(name: &str) -> String {
    let replaced: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let collapsed = replaced.trim_matches('_');
    if collapsed.is_empty() {
        return "UNKNOWN".to_string();
    }
    collapsed.chars().take(MAX_IDENTIFIER_LEN).collect()
}

/// TXT出力: 1行に1CIDR
pub fn render_txt(ipnets: &[IpNet], header: &str) -> String {
    let body = ipnets
        .iter()
        .map(|net| net.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{}\n", header, body)
}

/// NFT出力: define ブロック
pub fn render_nft(define_name: &str, ipnets: &[IpNet], header: &str) -> String {
    let mut content = String::new();
    content.push_str(header);
    content.push_str(&format!("define {} {{\n", sanitize_identifier(define_name)));
    for net in ipnets {
        content.push_str(&format!("    {},\n", net));
    }
    content.push_str("}\n");
    content
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    source: &'a str,
    generated_at: &'a str,
    cidrs: Vec<String>,
}

/// JSON出力
pub fn render_json(source: &str, now_str: &str, ipnets: &[IpNet]) -> Result<String, AppError> {
    let doc = JsonDocument {
        source,
        generated_at: now_str,
        cidrs: ipnets.iter().map(|n| n.to_string()).collect(),
    };
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}

/// ファイルへの書き出し(追記 or 上書き)
pub async fn write_output<P: AsRef<Path>>(
    path: P,
    content: &str,
    mode: WriteMode,
) -> Result<(), AppError> {
    match mode {
        WriteMode::Append => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path.as_ref())
                .await?;
            file.write_all(content.as_bytes()).await?;
        }
        WriteMode::Overwrite => {
            fs::write(path.as_ref(), content).await?;
        }
    }
    log::info!("Wrote {} bytes to {}", content.len(), path.as_ref().display());
    Ok(())
}
