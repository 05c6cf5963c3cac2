use std::collections::HashMap;

use serde_derive::Serialize;

use crate::model::Synset;
use crate::template::SubcatTemplate;

/// The lemmas of one synset that share a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubcatGroup {
    pub template : String,
    pub lemmas : Vec<String>
}

impl SubcatGroup {
    pub fn render(&self) -> String {
        SubcatTemplate::parse(&self.template).render(&self.lemmas)
    }
}

/// Lemmas with no surface form take no part in the frames.
pub fn has_subcats(synset : &Synset) -> bool {
    synset.lemmas.iter().any(|l| !l.lemma.is_empty() && !l.subcats.is_empty())
}

/// Groups lemmas by frame text. Groups appear in the order their frame is
/// first seen and lemmas within a group in synset order, without repeats.
pub fn extract(synset : &Synset) -> Vec<SubcatGroup> {
    let mut groups : Vec<SubcatGroup> = Vec::new();
    let mut index : HashMap<&str, usize> = HashMap::new();
    for lemma in synset.lemmas.iter().filter(|l| !l.lemma.is_empty()) {
        for subcat in lemma.subcats.iter() {
            let i = *index.entry(subcat.as_str()).or_insert_with(|| {
                groups.push(SubcatGroup {
                    template : subcat.clone(),
                    lemmas : Vec::new()
                });
                groups.len() - 1
            });
            let group = &mut groups[i];
            if !group.lemmas.contains(&lemma.lemma) {
                group.lemmas.push(lemma.lemma.clone());
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lemma, PartOfSpeech};

    fn synset(lemmas : Vec<(&str, Vec<&str>)>) -> Synset {
        Synset {
            id : "00001740-v".to_string(),
            pos : PartOfSpeech::Verb,
            definition : String::new(),
            examples : Vec::new(),
            lemmas : lemmas.into_iter().map(|(l, s)| Lemma {
                lemma : l.to_string(),
                subcats : s.into_iter().map(|x| x.to_string()).collect()
            }).collect()
        }
    }

    #[test]
    fn groups_in_encounter_order() {
        let s = synset(vec![
            ("eat", vec!["Somebody ----s something", "Somebody ----s"]),
            ("consume", vec!["Somebody ----s"]),
            ("ingest", vec!["Somebody ----s something", "Something is ----ing"])
        ]);
        let groups = extract(&s);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].template, "Somebody ----s something");
        assert_eq!(groups[0].lemmas, vec!["eat", "ingest"]);
        assert_eq!(groups[1].template, "Somebody ----s");
        assert_eq!(groups[1].lemmas, vec!["eat", "consume"]);
        assert_eq!(groups[2].template, "Something is ----ing");
        assert_eq!(groups[2].lemmas, vec!["ingest"]);
        assert_eq!(extract(&s), groups);
    }

    #[test]
    fn repeated_lemma_is_listed_once() {
        let s = synset(vec![
            ("eat", vec!["----s it", "----s it"]),
            ("eat", vec!["----s it"])
        ]);
        let groups = extract(&s);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lemmas, vec!["eat"]);
    }

    #[test]
    fn renders_groups() {
        let s = synset(vec![("eat", vec!["----s it"]), ("buy", vec!["----s it"])]);
        let sentences : Vec<String> = extract(&s).iter().map(|g| g.render()).collect();
        assert_eq!(sentences, vec!["eats/buys it"]);
    }

    #[test]
    fn detects_subcats() {
        assert!(!has_subcats(&synset(vec![("dog", vec![])])));
        assert!(!has_subcats(&synset(vec![])));
        assert!(has_subcats(&synset(vec![("dog", vec![]), ("run", vec!["----s"])])));
    }

    #[test]
    fn lemmas_without_subcats_field_yield_nothing() {
        let s : Synset = serde_json::from_str(
            r#"{"id": "x", "lemmas": [{"lemma": "dog"}]}"#).unwrap();
        assert!(!has_subcats(&s));
        assert!(extract(&s).is_empty());
    }

    #[test]
    fn nameless_lemmas_are_skipped() {
        let s : Synset = serde_json::from_str(
            r#"{"id":"x","lemmas":[{"subcats":["Somebody ----s"]},{"lemma":"eat","subcats":["Somebody ----s it"]}]}"#)
            .unwrap();
        let groups = extract(&s);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].template, "Somebody ----s it");
        assert_eq!(groups[0].lemmas, vec!["eat"]);

        let s : Synset = serde_json::from_str(r#"{"id":"x","lemmas":[{"subcats":["Somebody ----s"]}]}"#)
            .unwrap();
        assert!(!has_subcats(&s));
        assert!(extract(&s).is_empty());
    }
}
