use std::{io::Read, path::Path};

use crate::{
    pokemon::{Pokemon, PK4_SIZE_PARTY},
    text::CharacterTable,
    Error, Result,
};

/// Minimum size of a save: the leading chunk with the trainer header and party.
pub const SAVE_CHUNK_SIZE: usize = 1576;
/// Start of the first party slot in a Platinum save.
pub const PARTY_OFFSET: usize = 0xA0;
pub const PARTY_SIZE: usize = 6;

pub struct SaveFile {
    contents: Vec<u8>,
}

impl SaveFile {
    pub fn new(p: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(&p).map_err(|err| {
            log::error!("No file at path: {} ({err})", p.as_ref().display());
            err
        })?;
        let mut reader = std::io::BufReader::new(file);
        let mut contents = Vec::new();
        let read_len = reader.read_to_end(&mut contents)?;
        log::debug!("Read {read_len} bytes from {}", p.as_ref().display());
        Self::from_bytes(contents)
    }

    pub fn from_bytes(contents: Vec<u8>) -> Result<Self> {
        if contents.len() < SAVE_CHUNK_SIZE {
            log::error!(
                "Invalid length for a game save. Found: {}, Expected: {SAVE_CHUNK_SIZE}",
                contents.len()
            );
            return Err(Error::BufferTooShort {
                expected: SAVE_CHUNK_SIZE,
                found: contents.len(),
            });
        }
        Ok(SaveFile { contents })
    }

    pub fn get_party(&self, chars: &CharacterTable) -> Result<[Pokemon; PARTY_SIZE]> {
        self.get_party_at(PARTY_OFFSET, chars)
    }

    pub fn get_party_at(
        &self,
        party_offset: usize,
        chars: &CharacterTable,
    ) -> Result<[Pokemon; PARTY_SIZE]> {
        decode_party(&self.contents, party_offset, chars)
    }
}

/// Decode the six party slots that start at `party_offset`.
///
/// Either all six decode or the whole call fails.
pub fn decode_party(
    save_data: &[u8],
    party_offset: usize,
    chars: &CharacterTable,
) -> Result<[Pokemon; PARTY_SIZE]> {
    let expected = party_offset.saturating_add(PARTY_SIZE * PK4_SIZE_PARTY);
    if save_data.len() < expected {
        log::error!(
            "Party at offset 0x{party_offset:x} needs {expected} bytes, save has {}",
            save_data.len()
        );
        return Err(Error::BufferTooShort {
            expected,
            found: save_data.len(),
        });
    }

    let mut party: [Pokemon; PARTY_SIZE] = Default::default();
    for (idx, pkmn) in party.iter_mut().enumerate() {
        let slot_offset = party_offset + idx * PK4_SIZE_PARTY;
        log::trace!("Decoding party slot {idx} at offset 0x{slot_offset:x}");
        *pkmn = Pokemon::from_pk4(&save_data[slot_offset..slot_offset + PK4_SIZE_PARTY], chars)?;
    }

    Ok(party)
}
