use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

use crate::{
    prng::Prng,
    shuffle::{self, Block, BLOCK_SIZE},
    text::CharacterTable,
    Error, Result,
};

pub const PK4_SIZE_PARTY: usize = 236;

pub const PERSONALITY_OFFSET: usize = 0x00;
pub const CHECKSUM_OFFSET: usize = 0x06;
pub const ENCRYPTED_START: usize = 0x08;
pub const ENCRYPTED_END: usize = 0x88;
pub const BATTLE_STATS_START: usize = 0x88;
pub const BATTLE_STATS_END: usize = 0x8E;
/// Low byte of the last battle stats word.
pub const LEVEL_OFFSET: usize = BATTLE_STATS_START + 4;
// Within block C
pub const NICKNAME_SIZE: usize = 22;
// Within block A
pub const EVS_OFFSET: usize = 0x10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffortValues {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl EffortValues {
    /// Cap the game puts on the sum, not checked here.
    pub const MAX_TOTAL: u16 = 510;

    fn from_bytes(evs: &[u8; 6]) -> Self {
        EffortValues {
            hp: evs[0],
            attack: evs[1],
            defense: evs[2],
            sp_attack: evs[3],
            sp_defense: evs[4],
            speed: evs[5],
        }
    }

    pub fn total(&self) -> u16 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|ev| *ev as u16)
        .sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub level: u8,
    pub effort_values: EffortValues,
}

impl Pokemon {
    /// Decode one party slot.
    ///
    /// The 128 bytes after the header are masked with a keystream seeded from
    /// the checksum and stored in a personality-dependent block order. The level
    /// lives in the separately masked battle stats that follow, keyed by the
    /// personality value itself.
    pub fn from_pk4(pk4: &[u8], chars: &CharacterTable) -> Result<Self> {
        if pk4.len() < PK4_SIZE_PARTY {
            log::error!(
                "Expected {PK4_SIZE_PARTY} bytes for a party Pokemon, got {}",
                pk4.len()
            );
            return Err(Error::BufferTooShort {
                expected: PK4_SIZE_PARTY,
                found: pk4.len(),
            });
        }

        let personality_value = LittleEndian::read_u32(&pk4[PERSONALITY_OFFSET..]);
        let checksum = LittleEndian::read_u16(&pk4[CHECKSUM_OFFSET..]);
        log::trace!("Decoding PK4 with personality 0x{personality_value:08x}, checksum 0x{checksum:04x}");

        // Header stays as-is so block offsets keep counting from the slot start
        let mut plaintext = pk4[..ENCRYPTED_END].to_vec();
        Prng::new(checksum as u32).apply(&mut plaintext[ENCRYPTED_START..]);

        let order = shuffle::select(personality_value);
        log::debug!(
            "Block order {:?} (index {})",
            order.shuffled,
            shuffle::shuffle_index(personality_value)
        );
        let block_a = get_block(&plaintext, order.unshuffled_offset(Block::A));
        let block_c = get_block(&plaintext, order.unshuffled_offset(Block::C));

        let name = chars.decode(&block_c[..NICKNAME_SIZE]);
        log::debug!("Decoded name '{name}' ({} chars)", name.chars().count());

        let level = decrypt_level(&pk4[BATTLE_STATS_START..BATTLE_STATS_END], personality_value);

        let mut evs = [0u8; 6];
        evs.copy_from_slice(&block_a[EVS_OFFSET..EVS_OFFSET + 6]);

        Ok(Pokemon {
            name,
            level,
            effort_values: EffortValues::from_bytes(&evs),
        })
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let evs = &self.effort_values;
        write!(
            f,
            "{} Lv. {} | HP {} ATK {} DEF {} SpA {} SpD {} SPE {} | EVs {}/{}",
            self.name,
            self.level,
            evs.hp,
            evs.attack,
            evs.defense,
            evs.sp_attack,
            evs.sp_defense,
            evs.speed,
            evs.total(),
            EffortValues::MAX_TOTAL,
        )
    }
}

fn get_block(plaintext: &[u8], offset: usize) -> &[u8] {
    &plaintext[offset..offset + BLOCK_SIZE]
}

/// Only the last word of the battle stats keystream is kept; its low byte is the level.
fn decrypt_level(battle_stats: &[u8], personality_value: u32) -> u8 {
    let mut prng = Prng::new(personality_value);
    let decrypted = battle_stats
        .chunks_exact(2)
        .map(|word| LittleEndian::read_u16(word) ^ prng.next_word())
        .last()
        .unwrap_or_default();
    (decrypted & 0xFF) as u8
}
