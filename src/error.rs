use std::io;
use thiserror::Error;
use tokio::sync::AcquireError;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum AppError {
    // アドレス文字列が想定するファミリーとしてパースできない
    #[error("Invalid {endpoint} address format: {input}")]
    InvalidAddressFormat { endpoint: &'static str, input: String },

    // 開始アドレスが終了アドレスより大きい
    #[error("Invalid range: begin address {begin} is greater than end address {end}")]
    InvalidRange { begin: String, end: String },

    // 算出したブロックをCIDRとして正規化できなかった
    #[error("CIDR format error: {0}")]
    Format(String),

    // バッチ入力などの構文エラー
    #[error("Parse error: {0}")]
    ParseError(String),

    // バッチ入力の特定行で発生したエラー
    #[error("line {line}: {source}")]
    BatchLine {
        line: usize,
        #[source]
        source: Box<AppError>,
    },

    // CLIオプションの値が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // IOまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // JSON出力のシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // acquire_owned().await? のエラー
    #[error("Semaphore acquire error: {0}")]
    SemaphoreError(#[from] AcquireError),

    // tokio::spawn(…).await? のエラー
    #[error("Task join error: {0}")]
    JoinError(#[from] JoinError),
}
