use ip_range_cidr::convert::parse_range;
use ip_range_cidr::common::IpFamily;
use ip_range_cidr::error::AppError;
use ip_range_cidr::{convert_ip_range_to_cidrs, convert_ip_range_to_nets};

fn cidrs(begin: &str, end: &str) -> Vec<String> {
    convert_ip_range_to_cidrs(begin, end)
        .unwrap_or_else(|e| panic!("conversion of {begin} - {end} failed: {e}"))
}

#[test]
fn converts_documented_scenarios() {
    assert_eq!(cidrs("10.0.0.5", "10.0.0.7"), vec!["10.0.0.5/32", "10.0.0.6/31"]);
    assert_eq!(cidrs("192.168.1.0", "192.168.1.0"), vec!["192.168.1.0/32"]);
    assert_eq!(cidrs("192.168.1.0", "192.168.1.255"), vec!["192.168.1.0/24"]);
    assert_eq!(cidrs("::ff:0", "::ff:ffff"), vec!["::ff:0/112"]);
}

#[test]
fn converts_full_ranges() {
    assert_eq!(cidrs("0.0.0.0", "255.255.255.255"), vec!["0.0.0.0/0"]);
    assert_eq!(
        cidrs("::", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        vec!["::/0"]
    );
}

#[test]
fn converts_ipv6_ranges() {
    assert_eq!(cidrs("2001:db8::", "2001:db8::ffff"), vec!["2001:db8::/112"]);
    assert_eq!(
        cidrs("2001:db8::1", "2001:db8::4"),
        vec!["2001:db8::1/128", "2001:db8::2/127", "2001:db8::4/128"]
    );
    assert_eq!(cidrs("::1", "::1"), vec!["::1/128"]);
}

#[test]
fn reversed_range_is_rejected() {
    match convert_ip_range_to_cidrs("0.0.0.1", "0.0.0.0") {
        Err(AppError::InvalidRange { begin, end }) => {
            assert_eq!(begin, "0.0.0.1");
            assert_eq!(end, "0.0.0.0");
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn malformed_addresses_are_rejected() {
    match convert_ip_range_to_cidrs("10.0.0.256", "10.0.0.1") {
        Err(AppError::InvalidAddressFormat { endpoint, .. }) => assert_eq!(endpoint, "begin"),
        other => panic!("expected InvalidAddressFormat, got {other:?}"),
    }
    match convert_ip_range_to_cidrs("2001:db8::", "2001:db8::zz") {
        Err(AppError::InvalidAddressFormat { endpoint, .. }) => assert_eq!(endpoint, "end"),
        other => panic!("expected InvalidAddressFormat, got {other:?}"),
    }
    assert!(convert_ip_range_to_cidrs("", "10.0.0.1").is_err());
}

#[test]
fn mixed_families_are_rejected() {
    match convert_ip_range_to_cidrs("10.0.0.1", "::1") {
        Err(AppError::InvalidAddressFormat { endpoint, input }) => {
            assert_eq!(endpoint, "end");
            assert_eq!(input, "::1");
        }
        other => panic!("expected InvalidAddressFormat, got {other:?}"),
    }
    match convert_ip_range_to_cidrs("::1", "10.0.0.1") {
        Err(AppError::InvalidAddressFormat { endpoint, .. }) => assert_eq!(endpoint, "end"),
        other => panic!("expected InvalidAddressFormat, got {other:?}"),
    }
}

#[test]
fn ipv4_mapped_text_is_treated_as_ipv4() {
    assert_eq!(
        cidrs("::ffff:10.0.0.1", "10.0.0.3"),
        vec!["10.0.0.1/32", "10.0.0.2/31"]
    );
    let range = parse_range("::ffff:10.0.0.1", "::ffff:10.0.0.3")
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(range.family, IpFamily::V4);
    assert_eq!(range.begin.width(), 32);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(cidrs(" 10.0.0.4 ", "10.0.0.7\n"), vec!["10.0.0.4/30"]);
}

#[test]
fn repeated_conversion_is_identical() {
    let a = cidrs("172.16.3.17", "172.31.200.9");
    let b = cidrs("172.16.3.17", "172.31.200.9");
    assert_eq!(a, b);
    assert!(a.len() > 1);
}

#[test]
fn nets_match_strings() {
    let nets = convert_ip_range_to_nets("10.0.0.5", "10.0.0.7")
        .unwrap_or_else(|e| panic!("conversion failed: {e}"));
    let strings: Vec<String> = nets.iter().map(|n| n.to_string()).collect();
    assert_eq!(strings, cidrs("10.0.0.5", "10.0.0.7"));
}
