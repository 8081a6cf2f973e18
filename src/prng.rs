use byteorder::{ByteOrder, LittleEndian};

const MULTIPLIER: u32 = 0x41C6_4E6D;
const INCREMENT: u32 = 0x6073;

/// Linear congruential generator used by the game to mask stored Pokemon data.
///
/// X[n+1] = (0x41C64E6D * X[n] + 0x6073) mod 2^32, and each call hands out the
/// upper 16 bits of the new state. The full 32-bit state has to be carried
/// between calls or every word after the first comes out wrong.
#[derive(Clone, Debug)]
pub struct Prng {
    state: u32,
}

impl Prng {
    pub fn new(seed: u32) -> Self {
        Prng { state: seed }
    }

    pub fn next_word(&mut self) -> u16 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) as u16
    }

    /// XOR each little-endian word of `data` with the next keystream word.
    ///
    /// The mask is symmetric, so the same call encrypts or decrypts. A trailing
    /// odd byte is left untouched.
    pub fn apply(&mut self, data: &mut [u8]) {
        for word in data.chunks_exact_mut(2) {
            let masked = LittleEndian::read_u16(word) ^ self.next_word();
            LittleEndian::write_u16(word, masked);
        }
    }
}

impl Iterator for Prng {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        Some(self.next_word())
    }
}
