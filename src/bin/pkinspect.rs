use std::path::PathBuf;

use clap::Parser;
use pkplat::{save::PARTY_OFFSET, CharacterTable, SaveFile};

#[derive(Parser)]
struct Cli {
    #[arg(short, long)]
    sav: PathBuf,
    #[arg(short, long, env = "PKPLAT_CHAR_TABLE")]
    chars: PathBuf,
    #[arg(long, value_parser = parse_offset, default_value_t = PARTY_OFFSET)]
    party_offset: usize,
}

fn parse_offset(arg: &str) -> Result<usize, std::num::ParseIntError> {
    match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => arg.parse(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Cli::parse();
    let chars = CharacterTable::load(&args.chars)?;
    let save_file = SaveFile::new(&args.sav)?;

    let party = save_file.get_party_at(args.party_offset, &chars)?;
    for (idx, pkmn) in party.iter().enumerate() {
        println!("Slot {}: {pkmn}", idx + 1);
    }

    Ok(())
}
