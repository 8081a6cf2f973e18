pub mod error;
pub mod pokemon;
pub mod prng;
pub mod save;
pub mod shuffle;
pub mod text;

pub use error::{Error, Result};
pub use pokemon::{EffortValues, Pokemon};
pub use save::{decode_party, SaveFile};
pub use text::CharacterTable;
