use ip_range_cidr::bit_address::BitAddress;
use ip_range_cidr::cidr_format::{
    block_to_ipnet, format_block, ipv4_section_to_string, ipv6_section_to_string, raw_cidr_text,
};
use ip_range_cidr::range_split::CidrBlock;
use std::net::{Ipv4Addr, Ipv6Addr};

fn v4(s: &str) -> BitAddress {
    let addr: Ipv4Addr = s.parse().unwrap_or_else(|e| panic!("failed to parse {s}: {e}"));
    addr.into()
}

fn v6(s: &str) -> BitAddress {
    let addr: Ipv6Addr = s.parse().unwrap_or_else(|e| panic!("failed to parse {s}: {e}"));
    addr.into()
}

#[test]
fn ipv6_sections_are_lowercase_hex_without_padding() {
    let bits = v6("0:37f:ABCD::");
    assert_eq!(ipv6_section_to_string(&bits, 0), "0");
    assert_eq!(ipv6_section_to_string(&bits, 1), "37f");
    assert_eq!(ipv6_section_to_string(&bits, 2), "abcd");
}

#[test]
fn ipv4_sections_are_decimal() {
    let bits = v4("192.168.1.0");
    assert_eq!(ipv4_section_to_string(&bits, 0), "192");
    assert_eq!(ipv4_section_to_string(&bits, 3), "0");
}

#[test]
fn raw_text_is_not_compressed() {
    assert_eq!(raw_cidr_text(&v6("::ff:0"), 112), "0:0:0:0:0:0:ff:0/112");
    assert_eq!(raw_cidr_text(&v4("10.0.0.6"), 31), "10.0.0.6/31");
}

#[test]
fn formats_ipv6_with_zero_compression() -> Result<(), ip_range_cidr::AppError> {
    let block = CidrBlock::new(v6("0:0:0:0:0:0:ff:0"), 112);
    assert_eq!(format_block(&block)?, "::ff:0/112");

    let block = CidrBlock::new(v6("::"), 0);
    assert_eq!(format_block(&block)?, "::/0");
    Ok(())
}

#[test]
fn formats_ipv4_blocks() -> Result<(), ip_range_cidr::AppError> {
    let block = CidrBlock::new(v4("192.168.1.0"), 24);
    assert_eq!(format_block(&block)?, "192.168.1.0/24");

    let block = CidrBlock::new(v4("0.0.0.0"), 0);
    assert_eq!(format_block(&block)?, "0.0.0.0/0");
    Ok(())
}

#[test]
fn host_bits_are_dropped() -> Result<(), ip_range_cidr::AppError> {
    let block = CidrBlock::new(v4("192.168.1.77"), 24);
    assert_eq!(format_block(&block)?, "192.168.1.0/24");

    let net = block_to_ipnet(&block)?;
    assert_eq!(net.prefix_len(), 24);
    assert_eq!(net.network().to_string(), "192.168.1.0");
    Ok(())
}
