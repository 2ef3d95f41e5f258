//! アドレスを固定幅のビット列として扱うためのユーティリティ。
//!
//! ビット位置 0 が最上位ビット(MSB)。IPv4 は 32 ビット、IPv6 は 128 ビット。
//! 内部表現は `u128` に右詰めで格納する。

use crate::constants::{IPV4_BITS, IPV6_BITS};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitAddress {
    bits: u128,
    width: u8,
}

impl BitAddress {
    /// 生のアドレスバイト列(4 または 16 バイト)をビット列へ展開する。
    /// 各バイトは MSB から順に並べる。
    pub fn to_bits(octets: &[u8]) -> Self {
        assert!(
            octets.len() == 4 || octets.len() == 16,
            "address must be 4 or 16 bytes, got {}",
            octets.len()
        );
        let bits = octets
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
        Self {
            bits,
            width: (octets.len() * 8) as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn is_ipv6(&self) -> bool {
        self.width == IPV6_BITS
    }

    /// 右詰めの整数値
    pub fn raw(&self) -> u128 {
        self.bits
    }

    fn shift_of(&self, pos: usize) -> u32 {
        debug_assert!(pos < self.width as usize, "bit position {pos} out of range");
        (self.width as usize - 1 - pos) as u32
    }

    pub fn bit(&self, pos: usize) -> bool {
        (self.bits >> self.shift_of(pos)) & 1 == 1
    }

    pub fn with_bit(self, pos: usize, value: bool) -> Self {
        let mask = 1u128 << self.shift_of(pos);
        let bits = if value {
            self.bits | mask
        } else {
            self.bits & !mask
        };
        Self { bits, ..self }
    }

    /// プレフィックス長 `prefix_len` より後ろ(ホスト部)を表すマスク
    fn host_mask(&self, prefix_len: u8) -> u128 {
        debug_assert!(prefix_len <= self.width, "prefix {prefix_len} exceeds width");
        let host_bits = u32::from(self.width - prefix_len);
        if host_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        }
    }

    /// 先頭 `prefix_len` ビットを固定したときの最小アドレス。`prefix_len == 0` も可。
    pub fn prefix_min(self, prefix_len: u8) -> Self {
        Self {
            bits: self.bits & !self.host_mask(prefix_len),
            ..self
        }
    }

    /// 先頭 `prefix_len` ビットを固定したときの最大アドレス。
    pub fn prefix_max(self, prefix_len: u8) -> Self {
        Self {
            bits: self.bits | self.host_mask(prefix_len),
            ..self
        }
    }

    /// `pos` 以前のビットを変えずに、それより後ろを全て 0 にしたアドレス
    pub fn min_under(self, pos: usize) -> Self {
        self.prefix_min((pos + 1) as u8)
    }

    /// `pos` 以前のビットを変えずに、それより後ろを全て 1 にしたアドレス
    pub fn max_under(self, pos: usize) -> Self {
        self.prefix_max((pos + 1) as u8)
    }

    /// 数値比較と同じく self <= other を返す
    pub fn lower_equal(&self, other: &Self) -> bool {
        debug_assert_eq!(self.width, other.width, "bit width mismatch");
        self.bits <= other.bits
    }

    /// 最初に異なるビットの位置。完全に一致する場合は None。
    pub fn first_diff_pos(&self, other: &Self) -> Option<usize> {
        debug_assert_eq!(self.width, other.width, "bit width mismatch");
        let diff = self.bits ^ other.bits;
        if diff == 0 {
            return None;
        }
        let unused = 128 - u32::from(self.width);
        Some((diff.leading_zeros() - unused) as usize)
    }

    /// `start` から `len` ビット分をビッグエンディアンの整数として取り出す
    pub fn section_to_int(&self, start: usize, len: usize) -> u32 {
        assert!(len <= 32, "section of {len} bits does not fit in u32");
        assert!(start + len <= self.width as usize, "section out of range");
        if len == 0 {
            return 0;
        }
        let shift = self.width as usize - start - len;
        ((self.bits >> shift) & ((1u128 << len) - 1)) as u32
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        if self.width == IPV4_BITS {
            IpAddr::V4(Ipv4Addr::from(self.bits as u32))
        } else {
            IpAddr::V6(Ipv6Addr::from(self.bits))
        }
    }
}

impl From<Ipv4Addr> for BitAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self::to_bits(&addr.octets())
    }
}

impl From<Ipv6Addr> for BitAddress {
    fn from(addr: Ipv6Addr) -> Self {
        Self::to_bits(&addr.octets())
    }
}

impl From<IpAddr> for BitAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}
