use crate::bit_address::BitAddress;
use crate::cidr_format::{block_to_ipnet, format_block};
use crate::common::IpFamily;
use crate::error::AppError;
use crate::range_split::{CidrBlock, split_range};
use ipnet::IpNet;
use std::net::{IpAddr, Ipv6Addr};

/// パース済みのアドレス範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub family: IpFamily,
    pub begin: BitAddress,
    pub end: BitAddress,
}

/// 片側のアドレス文字列を、指定ファミリーとしてビット列に変換する
fn parse_endpoint(
    text: &str,
    family: IpFamily,
    endpoint: &'static str,
) -> Result<BitAddress, AppError> {
    let invalid = || AppError::InvalidAddressFormat {
        endpoint,
        input: text.to_string(),
    };
    let trimmed = text.trim();

    match family {
        IpFamily::V4 => match trimmed.parse::<IpAddr>().map_err(|_| invalid())? {
            IpAddr::V4(v4) => Ok(v4.into()),
            // ::ffff:a.b.c.d 形式は IPv4 として扱う
            IpAddr::V6(v6) => v6.to_ipv4_mapped().map(BitAddress::from).ok_or_else(invalid),
        },
        IpFamily::V6 => trimmed
            .parse::<Ipv6Addr>()
            .map(BitAddress::from)
            .map_err(|_| invalid()),
    }
}

/// 開始・終了アドレスの文字列を検証して範囲にする。
/// ファミリー不一致はフォーマットエラー、begin > end は範囲エラーとして返す。
pub fn parse_range(begin: &str, end: &str) -> Result<AddressRange, AppError> {
    let family = IpFamily::detect(begin);
    let begin_bits = parse_endpoint(begin, family, "begin")?;
    let end_bits = parse_endpoint(end, family, "end")?;
    debug_assert_eq!(begin_bits.width(), family.bit_width());

    if !begin_bits.lower_equal(&end_bits) {
        return Err(AppError::InvalidRange {
            begin: begin.trim().to_string(),
            end: end.trim().to_string(),
        });
    }

    Ok(AddressRange {
        family,
        begin: begin_bits,
        end: end_bits,
    })
}

fn split_parsed(range: &AddressRange) -> Vec<CidrBlock> {
    let blocks = split_range(range.begin, range.end);
    log::debug!(
        "{} range {} - {} split into {} block(s)",
        range.family.as_str(),
        range.begin.to_ip_addr(),
        range.end.to_ip_addr(),
        blocks.len()
    );
    blocks
}

/// IP範囲をCIDRのリストに変換する。
/// 例: [10.0.0.5, 10.0.0.7] → 10.0.0.5/32, 10.0.0.6/31
pub fn convert_ip_range_to_cidrs(begin: &str, end: &str) -> Result<Vec<String>, AppError> {
    let range = parse_range(begin, end)?;
    split_parsed(&range).iter().map(format_block).collect()
}

/// convert_ip_range_to_cidrs と同じ結果を IpNet で返す(出力処理用)
pub fn convert_ip_range_to_nets(begin: &str, end: &str) -> Result<Vec<IpNet>, AppError> {
    let range = parse_range(begin, end)?;
    split_parsed(&range).iter().map(block_to_ipnet).collect()
}
