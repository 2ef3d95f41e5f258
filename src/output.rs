use crate::common::{OutputFormat, WriteMode};
use crate::error::AppError;
use crate::output_common::{make_header, render_json, render_nft, render_txt, write_output};
use chrono::Local;
use ipnet::IpNet;
use std::io::Write;
use std::path::PathBuf;

/// 出力先と形式の指定
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub mode: WriteMode,
}

/// nftables の define 名: 出力ファイル名の stem、標準出力なら固定名
fn define_name(options: &OutputOptions) -> String {
    options
        .output
        .as_ref()
        .and_then(|p| p.file_stem())
        .and_then(|os| os.to_str())
        .unwrap_or("cidr_list")
        .to_string()
}

/// CIDRリストを指定形式の文字列に整形する。
/// ヘッダーはファイル出力時のみ付与する。
pub fn render_output(
    ipnets: &[IpNet],
    source: &str,
    options: &OutputOptions,
) -> Result<String, AppError> {
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let header = if options.output.is_some() {
        make_header(&now_str, source)
    } else {
        String::new()
    };

    match options.format {
        OutputFormat::Txt => Ok(render_txt(ipnets, &header)),
        OutputFormat::Nft => Ok(render_nft(&define_name(options), ipnets, &header)),
        OutputFormat::Json => render_json(source, &now_str, ipnets),
    }
}

/// 整形してファイルまたは標準出力へ書き出す
pub async fn emit_output(
    ipnets: &[IpNet],
    source: &str,
    options: &OutputOptions,
) -> Result<(), AppError> {
    let content = render_output(ipnets, source, options)?;

    match &options.output {
        Some(path) => write_output(path, &content, options.mode).await?,
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(content.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}
