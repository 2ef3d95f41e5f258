//! 定数の共通化

/// IPv4アドレスのビット幅
pub const IPV4_BITS: u8 = 32;

/// IPv6アドレスのビット幅
pub const IPV6_BITS: u8 = 128;

/// IPv4をテキスト化する際のグループ幅(8ビット×4)
pub const IPV4_GROUP_BITS: usize = 8;

/// IPv6をテキスト化する際のグループ幅(16ビット×8)
pub const IPV6_GROUP_BITS: usize = 16;

/// バッチ変換の同時実行数の既定値
pub const DEFAULT_CONCURRENCY: usize = 8;

/// nftables の define 名の最大長
pub const MAX_IDENTIFIER_LEN: usize = 64;
