use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use async_trait::async_trait;
use bzip2::read::BzDecoder;
use serde_derive::{Deserialize, Serialize};
use tracing::info;

use crate::error::WordNetError;
use crate::model::{null_as_default, validate_relations, Lemma, PartOfSpeech, Relation, Synset};
use crate::source::WordNetSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordNetEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pos : PartOfSpeech,
    #[serde(default, deserialize_with = "null_as_default")]
    lemmas : Vec<Lemma>,
    #[serde(default, deserialize_with = "null_as_default")]
    definition : String,
    #[serde(default, deserialize_with = "null_as_default")]
    examples : Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    relations : Vec<Link>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "null_as_default")]
    rel_type : String,
    #[serde(default, deserialize_with = "null_as_default")]
    target : String
}

/// A pre-built WordNet held in memory, keyed by synset id.
#[derive(Debug)]
pub struct WordNet {
    entries : HashMap<String, WordNetEntry>,
    by_lemma : HashMap<String, Vec<String>>
}

impl WordNet {
    pub fn new(entries : HashMap<String, WordNetEntry>) -> WordNet {
        let mut by_lemma : HashMap<String, Vec<String>> = HashMap::new();
        for (id, entry) in entries.iter() {
            for lemma in entry.lemmas.iter().filter(|l| !l.lemma.is_empty()) {
                by_lemma.entry(lemma.lemma.to_lowercase())
                    .or_insert_with(Vec::new)
                    .push(id.clone());
            }
        }
        for ids in by_lemma.values_mut() {
            ids.sort();
            ids.dedup();
        }
        WordNet {
            entries : entries,
            by_lemma : by_lemma
        }
    }

    pub fn from_reader<R : Read>(reader : R) -> Result<WordNet, WordNetError> {
        let entries : HashMap<String, WordNetEntry> = serde_json::from_reader(reader)?;
        Ok(WordNet::new(entries))
    }

    /// Loads a JSON dump, decompressing it first if the name ends in `.bz2`.
    pub fn load<P : AsRef<Path>>(path : P) -> Result<WordNet, WordNetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let wordnet = if path.extension().map_or(false, |e| e == "bz2") {
            WordNet::from_reader(BufReader::new(BzDecoder::new(file)))?
        } else {
            WordNet::from_reader(BufReader::new(file))?
        };
        info!(path = %path.display(), synsets = wordnet.len(), "loaded WordNet");
        Ok(wordnet)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn lemmas(&self, id : &str) -> Vec<String> {
        match self.entries.get(id) {
            Some(wne) => wne.lemmas.iter().map(|l| l.lemma.clone()).collect(),
            None => Vec::new()
        }
    }

    pub fn defn(&self, id : &str) -> String {
        match self.entries.get(id) {
            Some(wne) => wne.definition.clone(),
            None => String::new()
        }
    }

    pub fn synset(&self, id : &str) -> Option<Synset> {
        self.entries.get(id).map(|wne| Synset {
            id : id.to_string(),
            pos : wne.pos,
            definition : wne.definition.clone(),
            examples : wne.examples.clone(),
            lemmas : wne.lemmas.clone()
        })
    }

    pub fn relations(&self, id : &str) -> Vec<Relation> {
        match self.entries.get(id) {
            Some(wne) => wne.relations.iter().map(|link| Relation {
                target : link.target.clone(),
                rel_type : link.rel_type.clone(),
                lemmas : self.lemmas(&link.target),
                definition : self.defn(&link.target)
            }).collect(),
            None => Vec::new()
        }
    }
}

#[async_trait]
impl WordNetSource for WordNet {
    async fn lookup(&self, index : &str, key : &str) -> Result<Vec<Synset>, WordNetError> {
        match index {
            "id" => Ok(self.synset(key).into_iter().collect()),
            "lemma" => Ok(self.by_lemma.get(&key.to_lowercase())
                .map(|ids| ids.iter().filter_map(|id| self.synset(id)).collect())
                .unwrap_or_default()),
            other => Err(WordNetError::UnknownIndex(other.to_string()))
        }
    }

    async fn fetch_relations(&self, synset_id : &str) -> Result<Vec<Relation>, WordNetError> {
        Ok(validate_relations(synset_id, self.relations(synset_id)))
    }
}
