//! The four 32-byte data blocks of a stored Pokemon are written in one of 24
//! orders, picked by bits 13-17 of the personality value.

pub const BLOCK_SIZE: usize = 32;
/// Offset of the first block inside a slot, after personality, flags and checksum.
pub const BLOCKS_OFFSET: usize = 0x08;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Block {
    pub const ALL: [Block; 4] = [Block::A, Block::B, Block::C, Block::D];
}

#[derive(Debug, PartialEq, Eq)]
pub struct BlockOrder {
    /// Blocks as they appear in the stored data, first to last.
    pub shuffled: [Block; 4],
    /// For each canonical block, which 32-byte position it was written to.
    pub original_position: [usize; 4],
}

impl BlockOrder {
    pub fn unshuffled_offset(&self, block: Block) -> usize {
        BLOCKS_OFFSET + self.original_position[block as usize] * BLOCK_SIZE
    }
}

macro_rules! order {
    ($b0:ident $b1:ident $b2:ident $b3:ident => $p0:literal $p1:literal $p2:literal $p3:literal) => {
        BlockOrder {
            shuffled: [Block::$b0, Block::$b1, Block::$b2, Block::$b3],
            original_position: [$p0, $p1, $p2, $p3],
        }
    };
}

pub static BLOCK_ORDERS: [BlockOrder; 24] = [
    order!(A B C D => 0 1 2 3),
    order!(A B D C => 0 1 3 2),
    order!(A C B D => 0 2 1 3),
    order!(A C D B => 0 3 1 2),
    order!(A D B C => 0 2 3 1),
    order!(A D C B => 0 3 2 1),
    order!(B A C D => 1 0 2 3),
    order!(B A D C => 1 0 3 2),
    order!(B C A D => 2 0 1 3),
    order!(B C D A => 3 0 1 2),
    order!(B D A C => 2 0 3 1),
    order!(B D C A => 3 0 2 1),
    order!(C A B D => 1 2 0 3),
    order!(C A D B => 1 3 0 2),
    order!(C B A D => 2 1 0 3),
    order!(C B D A => 3 1 0 2),
    order!(C D A B => 2 3 0 1),
    order!(C D B A => 3 2 0 1),
    order!(D A B C => 1 2 3 0),
    order!(D A C B => 1 3 2 0),
    order!(D B A C => 2 1 3 0),
    order!(D B C A => 3 1 2 0),
    order!(D C A B => 2 3 1 0),
    order!(D C B A => 3 2 1 0),
];

pub fn shuffle_index(personality_value: u32) -> usize {
    (((personality_value & 0x3_E000) >> 0xD) % 24) as usize
}

pub fn select(personality_value: u32) -> &'static BlockOrder {
    &BLOCK_ORDERS[shuffle_index(personality_value)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_order_is_a_permutation() {
        for (idx, order) in BLOCK_ORDERS.iter().enumerate() {
            let mut seen = [false; 4];
            for position in order.original_position {
                assert!(position < 4, "order {idx} has position {position}");
                assert!(!seen[position], "order {idx} repeats position {position}");
                seen[position] = true;
            }
        }
    }

    #[test]
    fn test_positions_agree_with_shuffled_order() {
        for (idx, order) in BLOCK_ORDERS.iter().enumerate() {
            for block in Block::ALL {
                assert_eq!(
                    order.shuffled[order.original_position[block as usize]], block,
                    "order {idx} misplaces block {block:?}"
                );
            }
        }
    }

    #[test]
    fn test_orders_are_distinct() {
        for (idx, order) in BLOCK_ORDERS.iter().enumerate() {
            for other in &BLOCK_ORDERS[idx + 1..] {
                assert_ne!(order.shuffled, other.shuffled);
            }
        }
    }

    #[test]
    fn test_shuffle_index_in_range() {
        for bits in 0u32..32 {
            let personality_value = (bits << 13) | 0xFFFC_1FFF;
            let idx = shuffle_index(personality_value);
            assert!(idx < 24);
            assert_eq!(idx, (bits % 24) as usize);
        }
        assert!(shuffle_index(u32::MAX) < 24);
    }

    #[test]
    fn test_select_ignores_other_bits() {
        assert_eq!(select(0x0000_0000), &BLOCK_ORDERS[0]);
        assert_eq!(select(0xFFFC_1FFF), &BLOCK_ORDERS[0]);
        // Bits 13-17 set to 25 wrap around to order 1
        assert_eq!(shuffle_index(25 << 13), 1);
        assert!(std::ptr::eq(select(0x1234_5678), select(0x1234_5678)));
    }

    #[test]
    fn test_unshuffled_offset() {
        let order = &BLOCK_ORDERS[3]; // ACDB
        assert_eq!(order.unshuffled_offset(Block::A), 0x08);
        assert_eq!(order.unshuffled_offset(Block::C), 0x28);
        assert_eq!(order.unshuffled_offset(Block::D), 0x48);
        assert_eq!(order.unshuffled_offset(Block::B), 0x68);
    }
}
