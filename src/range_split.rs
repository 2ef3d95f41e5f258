use crate::bit_address::BitAddress;

/// 先頭 `prefix_len` ビットを共有する全アドレスを表すブロック
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrBlock {
    pub network: BitAddress,
    pub prefix_len: u8,
}

impl CidrBlock {
    pub fn new(network: BitAddress, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= network.width());
        Self {
            network: network.prefix_min(prefix_len),
            prefix_len,
        }
    }

    /// ブロック内の最小アドレス
    pub fn first(&self) -> BitAddress {
        self.network.prefix_min(self.prefix_len)
    }

    /// ブロック内の最大アドレス
    pub fn last(&self) -> BitAddress {
        self.network.prefix_max(self.prefix_len)
    }
}

/// [begin, end] を過不足なく覆うCIDRブロック列をアドレス昇順で返す。
///
/// 前提: begin と end のビット幅が等しく、begin <= end であること。
/// 破られた場合は呼び出し側のバグとして panic する。
pub fn split_range(begin: BitAddress, end: BitAddress) -> Vec<CidrBlock> {
    assert_eq!(
        begin.width(),
        end.width(),
        "begin and end must have the same bit width"
    );
    assert!(begin.lower_equal(&end), "begin must not be greater than end");

    let mut blocks = Vec::new();

    // 開始と終了が同じならホストルート1つ
    let Some(diff_pos) = begin.first_diff_pos(&end) else {
        blocks.push(CidrBlock::new(begin, begin.width()));
        return blocks;
    };

    let mut splitter = RangeSplitter {
        begin,
        end,
        blocks: &mut blocks,
    };
    splitter.descend(begin, diff_pos, true);
    blocks
}

/// 1回の分割計算に閉じた作業状態
struct RangeSplitter<'a> {
    begin: BitAddress,
    end: BitAddress,
    blocks: &'a mut Vec<CidrBlock>,
}

impl RangeSplitter<'_> {
    /// ビット位置 `pos` から下位へ向かって深さ優先で探索する
    fn descend(&mut self, cursor: BitAddress, pos: usize, is_first: bool) {
        if pos >= cursor.width() as usize {
            return;
        }

        if is_first {
            // 共有プレフィックス(先頭 pos ビット)のブロックがそのまま収まるか
            let prefix_len = pos as u8;
            let lo = cursor.prefix_min(prefix_len);
            let hi = cursor.prefix_max(prefix_len);
            if self.contains(lo, hi) {
                self.blocks.push(CidrBlock::new(lo, prefix_len));
                return;
            }
            self.descend(cursor, pos, false);
            return;
        }

        let prefix_len = (pos + 1) as u8;
        for bit in [false, true] {
            let candidate = cursor.with_bit(pos, bit);
            let lo = candidate.min_under(pos);
            let hi = candidate.max_under(pos);

            if !self.overlaps(lo, hi) {
                continue;
            }
            if self.contains(lo, hi) {
                self.blocks.push(CidrBlock::new(lo, prefix_len));
            } else {
                self.descend(candidate, pos + 1, false);
            }
        }
    }

    fn contains(&self, lo: BitAddress, hi: BitAddress) -> bool {
        self.begin.lower_equal(&lo) && hi.lower_equal(&self.end)
    }

    fn overlaps(&self, lo: BitAddress, hi: BitAddress) -> bool {
        self.begin.lower_equal(&hi) && lo.lower_equal(&self.end)
    }
}
