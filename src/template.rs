//! Subcategorization frames such as `"Somebody ----s something"`.
//!
//! A frame holds one placeholder. `----` takes the lemma as is, `----s` its
//! third person singular and `----ing` its gerund. Only the head (first word)
//! of a multi-word lemma is inflected: `give up` in `----s` is `gives up`.
use std::sync::OnceLock;

use regex::Regex;

use crate::morphology::{gerund, third_person_singular};

const UNDERLINE_OPEN : &str = "<span class=\"underline\">";
const UNDERLINE_CLOSE : &str = "</span>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Base,
    ThirdPerson,
    Gerund
}

impl Placeholder {
    fn from_suffix(suffix : Option<&str>) -> Placeholder {
        match suffix {
            Some("s") => Placeholder::ThirdPerson,
            Some("ing") => Placeholder::Gerund,
            _ => Placeholder::Base
        }
    }

    /// The text following `----` in the frame.
    pub fn suffix(&self) -> &'static str {
        match *self {
            Placeholder::Base => "",
            Placeholder::ThirdPerson => "s",
            Placeholder::Gerund => "ing"
        }
    }

    pub fn inflect(&self, word : &str) -> String {
        match *self {
            Placeholder::Base => word.to_string(),
            Placeholder::ThirdPerson => third_person_singular(word),
            Placeholder::Gerund => gerund(word)
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER : OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"----(?:(ing|s)\b)?").expect("Placeholder regex did not compile")
    })
}

/// Splits a lemma into its head word and the (possibly empty) remainder.
fn split_head(lemma : &str) -> (&str, Option<&str>) {
    match lemma.split_once(' ') {
        Some((head, rest)) => (head, Some(rest)),
        None => (lemma, None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    kind : Placeholder,
    start : usize,
    end : usize
}

/// A frame with its placeholder located once at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcatTemplate {
    text : String,
    slot : Option<Slot>
}

impl SubcatTemplate {
    pub fn parse(text : &str) -> SubcatTemplate {
        let slot = placeholder_regex().captures(text).and_then(|caps| {
            caps.get(0).map(|m| Slot {
                kind : Placeholder::from_suffix(caps.get(1).map(|s| s.as_str())),
                start : m.start(),
                end : m.end()
            })
        });
        SubcatTemplate {
            text : text.to_string(),
            slot : slot
        }
    }

    pub fn as_str(&self) -> &str { &self.text }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.slot.map(|s| s.kind)
    }

    fn splice(&self, slot : &Slot, replacement : &str) -> String {
        let mut out = String::with_capacity(self.text.len() + replacement.len());
        out.push_str(&self.text[..slot.start]);
        out.push_str(replacement);
        out.push_str(&self.text[slot.end..]);
        out
    }

    /// Marks `lemma` in the frame without inflecting it. For suffixed
    /// placeholders only the head word is marked and the frame's suffix stays
    /// attached to it, e.g. `<span class="underline">give</span>s up quickly`.
    pub fn underline(&self, lemma : &str) -> String {
        let slot = match self.slot {
            Some(ref slot) => slot,
            None => return self.text.clone()
        };
        let replacement = match slot.kind {
            Placeholder::Base => format!("{}{}{}", UNDERLINE_OPEN, lemma, UNDERLINE_CLOSE),
            kind => {
                let (head, rest) = split_head(lemma);
                let mut r = format!("{}{}{}{}", UNDERLINE_OPEN, head, UNDERLINE_CLOSE, kind.suffix());
                if let Some(rest) = rest {
                    r.push(' ');
                    r.push_str(rest);
                }
                r
            }
        };
        self.splice(slot, &replacement)
    }

    /// Fills the frame with every lemma inflected for the placeholder, joined
    /// by `/`.
    pub fn render<S : AsRef<str>>(&self, lemmas : &[S]) -> String {
        let slot = match self.slot {
            Some(ref slot) => slot,
            None => return self.text.clone()
        };
        let forms : Vec<String> = lemmas.iter().map(|lemma| {
            let (head, rest) = split_head(lemma.as_ref());
            let inflected = slot.kind.inflect(head);
            match rest {
                Some(rest) => format!("{} {}", inflected, rest),
                None => inflected
            }
        }).collect();
        self.splice(slot, &forms.join("/"))
    }
}

pub fn underline(template : &str, lemma : &str) -> String {
    SubcatTemplate::parse(template).underline(lemma)
}

pub fn render<S : AsRef<str>>(template : &str, lemmas : &[S]) -> String {
    SubcatTemplate::parse(template).render(lemmas)
}
