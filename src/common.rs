use crate::constants::{IPV4_BITS, IPV6_BITS};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    /// 開始アドレスの表記からファミリーを判定する("." を含めば IPv4)
    pub fn detect(begin_text: &str) -> Self {
        if begin_text.contains('.') {
            IpFamily::V4
        } else {
            IpFamily::V6
        }
    }

    pub fn bit_width(self) -> u8 {
        match self {
            IpFamily::V4 => IPV4_BITS,
            IpFamily::V6 => IPV6_BITS,
        }
    }

    /// ログやファイル名で使うラベル用
    pub fn as_str(self) -> &'static str {
        match self {
            IpFamily::V4 => "IPv4",
            IpFamily::V6 => "IPv6",
        }
    }
}

/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Nft,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "nft" => Ok(OutputFormat::Nft),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid output format '{other}'. Must be 'txt', 'nft' or 'json'"
            )),
        }
    }
}

/// ファイル出力時の書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Overwrite,
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(WriteMode::Append),
            "overwrite" => Ok(WriteMode::Overwrite),
            other => Err(format!(
                "Invalid write mode '{other}'. Must be 'append' or 'overwrite'"
            )),
        }
    }
}
