
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::fs::{File, OpenOptions};
use std::path::Path;

use super::wordnet::*;


/// Resolves one sense key per input line and writes the synset names to
/// dicname, one per line in input order. Unresolved keys become empty
/// lines. A previous output file is removed first.
fn resolve_sense_keys(wordnet: &WordNet, filename: &str, dicname: &str) -> std::io::Result<()> {
    let f = File::open(filename)?;
    let reader = BufReader::new(f);

    // Replace the previous output, never append across runs.
    if Path::new(dicname).is_file() {
        std::fs::remove_file(dicname)?;
    }

    let f = OpenOptions::new().create(true).append(true).open(dicname)?;
    let mut writer = BufWriter::new(f);

    for line in reader.lines() {
        let line = line?;
        let key = line.trim_end();
        match wordnet.resolve(key) {
            Some(name) => {
                writer.write(name.as_bytes())?;
                writer.write(b"\n")?;
            },
            None => {
                writer.write(b"\n")?;
            },
        }
    }

    writer.flush()?;

    Ok(())
}

pub fn run_resolve_sense_keys() -> std::io::Result<()> {
    const FILE_NAME: &str = "data/sense_keys.txt";
    const DIC_NAME: &str = "dictionaries/synset_names.txt";

    let wordnet = WordNet::load(WORDNET_DIR)?;

    resolve_sense_keys(&wordnet, FILE_NAME, DIC_NAME)?;

    Ok(())
}
