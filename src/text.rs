use std::{io::Read, path::Path};

use byteorder::{ByteOrder, LittleEndian};

use crate::Result;

pub const END_OF_STRING: u16 = 0xFFFF;
pub const NULL_CHAR: u16 = 0x0000;

/// Character set used by the game for names, indexed by 16-bit character code.
///
/// Loaded once up front and only read afterwards, so a single table can be
/// shared by every decode.
#[derive(Clone, Debug, Default)]
pub struct CharacterTable {
    chars: Vec<String>,
}

impl CharacterTable {
    pub fn new(chars: Vec<String>) -> Self {
        CharacterTable { chars }
    }

    /// Parse a table stored as a JSON array of strings.
    pub fn from_json(reader: impl Read) -> Result<Self> {
        let chars: Vec<String> = serde_json::from_reader(reader)?;
        log::debug!("Loaded character table with {} entries", chars.len());
        Ok(CharacterTable { chars })
    }

    pub fn load(p: impl AsRef<Path>) -> Result<Self> {
        log::trace!("Loading character table from {}", p.as_ref().display());
        let file = std::fs::File::open(&p)?;
        Self::from_json(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// `None` marks the end of a string: the terminator, an unused (null)
    /// code, or a code past the end of the table.
    pub fn lookup(&self, code: u16) -> Option<&str> {
        match code {
            END_OF_STRING | NULL_CHAR => None,
            _ => self.chars.get(code as usize).map(String::as_str),
        }
    }

    /// Decode little-endian character codes until the first one that fails lookup.
    pub fn decode(&self, text_data: &[u8]) -> String {
        let mut out_text = String::new();
        for code in text_data.chunks_exact(2).map(LittleEndian::read_u16) {
            match self.lookup(code) {
                Some(decoded) => out_text.push_str(decoded),
                None => break,
            }
        }

        out_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CharacterTable {
        let mut chars = vec![String::new(); 8];
        chars[1] = "P".into();
        chars[2] = "i".into();
        chars[3] = "k".into();
        chars[5] = "A".into();
        chars[6] = "é".into();
        CharacterTable::new(chars)
    }

    fn encode(codes: &[u16]) -> Vec<u8> {
        let mut data = vec![0u8; codes.len() * 2];
        LittleEndian::write_u16_into(codes, &mut data);
        data
    }

    #[test]
    fn test_lookup_in_range() {
        assert_eq!(table().lookup(5), Some("A"));
        assert_eq!(table().lookup(6), Some("é"));
    }

    #[test]
    fn test_lookup_end_of_string() {
        assert_eq!(table().lookup(END_OF_STRING), None);
    }

    #[test]
    fn test_lookup_null_char() {
        assert_eq!(table().lookup(NULL_CHAR), None);
    }

    #[test]
    fn test_lookup_out_of_bounds() {
        assert_eq!(table().lookup(8), None);
        assert_eq!(table().lookup(1000), None);
    }

    #[test]
    fn test_decode_stops_at_terminator() {
        for k in 0..10 {
            let mut codes = vec![5u16; k];
            codes.push(END_OF_STRING);
            codes.extend([5u16, 5, 5]);
            assert_eq!(table().decode(&encode(&codes)), "A".repeat(k));
        }
    }

    #[test]
    fn test_decode_stops_at_unknown_code() {
        let data = encode(&[1, 2, 0x0100, 3]);
        assert_eq!(table().decode(&data), "Pi");
    }

    #[test]
    fn test_decode_stops_at_null() {
        let data = encode(&[NULL_CHAR, 1, 2]);
        assert_eq!(table().decode(&data), "");
    }

    #[test]
    fn test_from_json() {
        let json = r#"["", "P", "i", "k"]"#;
        let chars = CharacterTable::from_json(json.as_bytes()).unwrap();
        assert_eq!(chars.len(), 4);
        assert_eq!(chars.decode(&encode(&[1, 2, 3, END_OF_STRING])), "Pik");
    }

    #[test]
    fn test_from_json_rejects_non_string_entries() {
        let json = r#"["", 1, 2]"#;
        assert!(matches!(
            CharacterTable::from_json(json.as_bytes()),
            Err(crate::Error::CharacterTable(_))
        ));
    }
}
