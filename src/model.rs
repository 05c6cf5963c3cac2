//! The data contract shared with the WordNet collaborator: synsets, their
//! lemmas and the relations leaving them.
//!
//! Every field defaults when absent or `null`, so a partial record from
//! upstream becomes a synset with empty lemma or subcat lists instead of a
//! parse failure. Records left without an identifier are dropped by
//! `validate_synsets` and `validate_relations`.
use serde::Deserializer;
use serde_derive::{Deserialize, Serialize};
use tracing::warn;

/// Reads `null` as the default value of the field.
pub(crate) fn null_as_default<'de, D, T>(deserializer : D) -> Result<T, D::Error>
    where D : Deserializer<'de>, T : Default + serde::Deserialize<'de> {
    let value : Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A WordNet part of speech
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
    #[serde(rename = "x", other)]
    #[default]
    Other
}

impl PartOfSpeech {
    pub fn as_short_str(&self) -> &'static str {
        match *self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::AdjectiveSatellite => "s",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::Other => "x"
        }
    }

    pub fn as_long_str(&self) -> &'static str {
        match *self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::AdjectiveSatellite => "adjective satellite",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Other => "other"
        }
    }

    pub fn is_adjective(&self) -> bool {
        matches!(*self, PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id : String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pos : PartOfSpeech,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition : String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples : Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lemmas : Vec<Lemma>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lemma {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lemma : String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcats : Vec<String>
}

/// An edge from the synset a fetch was issued for to `target`. The lemma and
/// definition fields summarise the target for display and may be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub target : String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rel_type : String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lemmas : Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition : String
}

impl Synset {
    pub fn lemma_names(&self) -> Vec<String> {
        self.lemmas.iter().map(|l| l.lemma.clone()).collect()
    }
}

/// Drops relations that do not name a target.
pub fn validate_relations(source_id : &str, relations : Vec<Relation>) -> Vec<Relation> {
    let before = relations.len();
    let valid : Vec<Relation> = relations.into_iter()
        .filter(|r| !r.target.trim().is_empty())
        .collect();
    if valid.len() != before {
        warn!(synset = source_id, dropped = before - valid.len(),
              "dropped relations without a target");
    }
    valid
}

/// Drops synsets that have no identifier.
pub fn validate_synsets(key : &str, synsets : Vec<Synset>) -> Vec<Synset> {
    let before = synsets.len();
    let valid : Vec<Synset> = synsets.into_iter()
        .filter(|s| !s.id.trim().is_empty())
        .collect();
    if valid.len() != before {
        warn!(key = key, dropped = before - valid.len(),
              "dropped synsets without an id");
    }
    valid
}
