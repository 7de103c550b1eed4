
// Fetches the WordNet 3.0 database and looks up sense keys in it.
// Synset names follow the usual "<first lemma>.<pos>.<sense number>"
// form, ex. "dog.n.01".

use std::collections::HashMap;
use std::fs::File;

use encoding_rs::*;
use rayon::prelude::*;
use regex::*;

use super::util::*;


const WORDNET_URL: &str = "https://wordnetcode.princeton.edu/3.0/WNdb-3.0.tar.gz";
const WORDNET_ARCHIVE: &str = "build/WNdb-3.0.tar.gz";

/// Directory the database archive extracts into.
pub const WORDNET_DIR: &str = "build/dict";

/// Database files per part of speech. Adjective satellite synsets have
/// ss_type "s" but are stored in the "a" files.
const POS_FILES: [(char, &str, &str); 4] = [
    ('n', "index.noun", "data.noun"),
    ('v', "index.verb", "data.verb"),
    ('a', "index.adj", "data.adj"),
    ('r', "index.adv", "data.adv"),
];

/// lemma%ss_type:lex_filenum:lex_id:head_word:head_id, head fields are
/// empty outside of satellites.
const SENSE_KEY_PATTERN: &str = r"^[^\s%]+%([1-5]):\d{2}:\d{2}:[^\s:]*:(?:\d{2})?$";

/// Gets the WordNet database files, skipping whatever already exists.
pub fn get_wordnet() -> std::io::Result<()> {
    let sense_index = format!("{}/index.sense", WORDNET_DIR);
    if let Ok(_) = File::open(&sense_index) {
        println!("{} already exists.", WORDNET_DIR);
        return Ok(());
    }

    command_wait("mkdir", vec!["-p", "build"])?;

    if let Ok(_) = File::open(WORDNET_ARCHIVE) {
        println!("{} already exists.", WORDNET_ARCHIVE);
    } else {
        command_wait("wget", vec!["-q", WORDNET_URL, "-O", WORDNET_ARCHIVE])?;
    }

    command_wait("tar", vec!["-xzf", WORDNET_ARCHIVE, "-C", "build"])?;

    if let Err(_) = File::open(&sense_index) {
        return Err(std::io::Error::new(std::io::ErrorKind::Other, "failed to fetch the WordNet database"));
    }

    Ok(())
}

#[derive(Debug)]
struct SynsetEntry {
    first_lemma: String,
    ss_type: char,
}

/// In-memory lookup over the WordNet database files.
#[derive(Debug)]
pub struct WordNet {
    /// Sense key to synset offset, from index.sense.
    senses: HashMap<String, u32>,
    /// Lemma and pos to synset offsets in sense order, from the index files.
    lemmas: HashMap<(String, char), Vec<u32>>,
    /// Data file pos and offset to synset, from the data files.
    synsets: HashMap<(char, u32), SynsetEntry>,
    key_re: Regex,
}

impl WordNet {
    /// Loads the database files from the extracted archive directory.
    pub fn load(dictdir: &str) -> std::io::Result<WordNet> {
        let s = read_file(&format!("{}/index.sense", dictdir))?;
        let senses = s
            .par_lines()
            .filter_map(parse_sense_line)
            .collect::<HashMap<String, u32>>();

        let mut lemmas = HashMap::new();
        let mut synsets = HashMap::new();
        for (pos, index_name, data_name) in &POS_FILES {
            let s = read_file(&format!("{}/{}", dictdir, index_name))?;
            lemmas.extend(
                s.par_lines()
                    .filter_map(|line| parse_index_line(*pos, line))
                    .collect::<Vec<_>>());

            let buf = read_file_vec(&format!("{}/{}", dictdir, data_name))?;
            // Glosses may carry stray latin-1 bytes, decode leniently.
            let (cow, _encoding_used, _had_errors) = WINDOWS_1252.decode(&buf);
            synsets.extend(
                cow.par_lines()
                    .filter_map(|line| parse_data_line(*pos, line))
                    .collect::<Vec<_>>());
        }

        Ok(WordNet {
            senses,
            lemmas,
            synsets,
            key_re: Regex::new(SENSE_KEY_PATTERN).unwrap(),
        })
    }

    /// Resolves a sense key to its synset name.
    /// Returns None when the key is malformed or not in the database.
    pub fn resolve(&self, sense_key: &str) -> Option<String> {
        let caps = self.key_re.captures(sense_key)?;
        let file_pos = match caps.get(1).unwrap().as_str() {
            "1" => 'n',
            "2" => 'v',
            "3" | "5" => 'a',
            "4" => 'r',
            _ => return None,
        };

        let offset = *self.senses.get(sense_key)?;
        let synset = self.synsets.get(&(file_pos, offset))?;

        // Satellites share the index entries of their head adjectives.
        let index_pos = if synset.ss_type == 's' { 'a' } else { synset.ss_type };
        let offsets = self.lemmas.get(&(synset.first_lemma.clone(), index_pos))?;
        let number = offsets.iter().position(|&o| o == offset)? + 1;

        Some(format!("{}.{}.{:02}", synset.first_lemma, synset.ss_type, number))
    }
}

/// Parses an index.sense line.
/// "dog%1:05:00:: 02084071 1 42"
fn parse_sense_line(line: &str) -> Option<(String, u32)> {
    let mut fields = line.split_whitespace();
    let key = fields.next()?;
    let offset = fields.next()?.parse::<u32>().ok()?;
    Some((String::from(key), offset))
}

/// Parses an index.pos line, the synset offsets are the trailing
/// synset_cnt fields, most frequent sense first.
/// "dog n 7 5 @ ~ #m #p ; 7 6 02084071 10114209 ..."
fn parse_index_line(pos: char, line: &str) -> Option<((String, char), Vec<u32>)> {
    // License header lines start with spaces.
    if line.starts_with(' ') {
        return None;
    }

    let fields = line.split_whitespace().collect::<Vec<&str>>();
    let count = fields.get(2)?.parse::<usize>().ok()?;
    if count == 0 || fields.len() < count + 3 {
        return None;
    }

    let offsets = fields[fields.len() - count..]
        .iter()
        .map(|s| s.parse::<u32>())
        .collect::<Result<Vec<u32>, _>>()
        .ok()?;

    Some(((String::from(fields[0]), pos), offsets))
}

/// Parses a data.pos line up to its first word.
/// "02084071 05 n 03 dog 0 domestic_dog 0 ... | a member of the genus Canis ..."
fn parse_data_line(pos: char, line: &str) -> Option<((char, u32), SynsetEntry)> {
    if line.starts_with(' ') {
        return None;
    }

    let mut fields = line.split_whitespace();
    let offset = fields.next()?.parse::<u32>().ok()?;
    fields.next()?; // lex_filenum
    let ss_type = fields.next()?.chars().next()?;
    fields.next()?; // w_cnt
    let word = fields.next()?;

    // "fast(a)" carries a syntactic marker, the lemma is "fast".
    let lemma = word.split('(').next().unwrap().to_lowercase();

    Some(((pos, offset), SynsetEntry { first_lemma: lemma, ss_type }))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    /// Writes a small but well-formed database into dir.
    pub fn fixture_dict(dir: &Path) {
        let files: [(&str, &str); 9] = [
            ("index.sense",
             "dog%1:05:00:: 02084071 1 42\n\
              dog%1:18:01:: 10114209 2 1\n\
              entity%1:03:00:: 00001740 1 11\n\
              fast%3:00:00:: 00976000 1 6\n\
              quick%5:00:00:fast:01 00976508 1 0\n"),
            ("index.noun",
             "  1 This software and database is being provided to you.\n\
              dog n 2 4 @ ~ #m #p 2 2 02084071 10114209\n\
              entity n 1 1 ~ 1 1 00001740\n"),
            ("data.noun",
             "  1 This software and database is being provided to you.\n\
              00001740 03 n 01 entity 0 001 ~ 00001930 n 0000 | that which is perceived to have its own distinct existence\n\
              02084071 05 n 03 dog 0 domestic_dog 0 Canis_familiaris 0 001 @ 02083346 n 0000 | a member of the genus Canis\n\
              10114209 18 n 01 dog 0 001 @ 10287213 n 0000 | informal term for a man\n"),
            ("index.adj",
             "fast a 2 2 & ! 2 2 00976000 00976508\n\
              quick a 1 1 & 1 1 00976508\n"),
            ("data.adj",
             "00976000 00 a 01 fast(a) 0 001 ! 01074112 a 0000 | acting or moving quickly\n\
              00976508 00 s 02 quick 0 speedy 0 001 & 00976000 a 0000 | accomplished rapidly and without delay\n"),
            ("index.verb", ""),
            ("data.verb", ""),
            ("index.adv", ""),
            ("data.adv", ""),
        ];
        for (name, content) in &files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    fn fixture_wordnet() -> WordNet {
        let dir = tempfile::tempdir().unwrap();
        fixture_dict(dir.path());
        WordNet::load(dir.path().to_str().unwrap()).unwrap()
    }

    #[test]
    fn resolves_noun_sense_keys() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("dog%1:05:00::"), Some(String::from("dog.n.01")));
        assert_eq!(wn.resolve("entity%1:03:00::"), Some(String::from("entity.n.01")));
    }

    #[test]
    fn sense_number_follows_index_order() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("dog%1:18:01::"), Some(String::from("dog.n.02")));
    }

    #[test]
    fn satellite_uses_head_adjective_index() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("quick%5:00:00:fast:01"), Some(String::from("quick.s.01")));
    }

    #[test]
    fn syntactic_marker_is_stripped() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("fast%3:00:00::"), Some(String::from("fast.a.01")));
    }

    #[test]
    fn unknown_key_is_unresolved() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("cat%1:05:00::"), None);
    }

    #[test]
    fn malformed_keys_are_unresolved() {
        let wn = fixture_wordnet();
        assert_eq!(wn.resolve("not a sense key"), None);
        assert_eq!(wn.resolve("dog%9:05:00::"), None);
        assert_eq!(wn.resolve("dog"), None);
        assert_eq!(wn.resolve(""), None);
    }

    #[test]
    fn missing_database_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordNet::load(dir.path().to_str().unwrap()).is_err());
    }
}
