use crate::bit_address::BitAddress;
use crate::constants::{IPV4_GROUP_BITS, IPV6_GROUP_BITS};
use crate::error::AppError;
use crate::range_split::CidrBlock;
use ipnet::IpNet;
use std::str::FromStr;

/// IPv4の8ビットグループを10進文字列に
pub fn ipv4_section_to_string(addr: &BitAddress, group: usize) -> String {
    addr.section_to_int(group * IPV4_GROUP_BITS, IPV4_GROUP_BITS)
        .to_string()
}

/// IPv6の16ビットグループを小文字16進文字列に(先頭ゼロなし、ゼロは"0")
pub fn ipv6_section_to_string(addr: &BitAddress, group: usize) -> String {
    format!(
        "{:x}",
        addr.section_to_int(group * IPV6_GROUP_BITS, IPV6_GROUP_BITS)
    )
}

/// 正規化前のCIDR文字列を組み立てる。
/// IPv6 のゼロ圧縮(::)はここでは行わない。
pub fn raw_cidr_text(addr: &BitAddress, prefix_len: u8) -> String {
    let groups: Vec<String> = if addr.is_ipv6() {
        (0..addr.width() as usize / IPV6_GROUP_BITS)
            .map(|g| ipv6_section_to_string(addr, g))
            .collect()
    } else {
        (0..addr.width() as usize / IPV4_GROUP_BITS)
            .map(|g| ipv4_section_to_string(addr, g))
            .collect()
    };
    let sep = if addr.is_ipv6() { ":" } else { "." };
    format!("{}/{}", groups.join(sep), prefix_len)
}

/// ブロックを ipnet でパースし直し、ホスト部を落としたネットワークとして返す
pub fn block_to_ipnet(block: &CidrBlock) -> Result<IpNet, AppError> {
    let text = raw_cidr_text(&block.network, block.prefix_len);
    let net = IpNet::from_str(&text)
        .map_err(|e| AppError::Format(format!("{text}: {e}")))?;
    Ok(net.trunc())
}

/// ブロックを正規化済みのCIDR文字列に
pub fn format_block(block: &CidrBlock) -> Result<String, AppError> {
    Ok(block_to_ipnet(block)?.to_string())
}
