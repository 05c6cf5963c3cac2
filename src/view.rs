//! One synset on screen: its relations, fetched once per bind and paged, and
//! its subcat frames rendered from the synset's own lemmas.
use serde_derive::Serialize;
use tracing::{debug, info, warn};

use crate::error::WordNetError;
use crate::model::{Relation, Synset};
use crate::pager::{RelationPager, DEFAULT_PAGE_SIZE};
use crate::source::WordNetSource;
use crate::subcat::{extract, has_subcats, SubcatGroup};
use crate::template::SubcatTemplate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ViewState {
    Idle,
    Loading,
    Ready,
    Failed
}

/// Identifies the fetch issued by one bind. A result is only applied if its
/// ticket still matches the view's binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    synset_id : String,
    generation : u64
}

impl FetchTicket {
    pub fn synset_id(&self) -> &str { &self.synset_id }
}

#[derive(Clone, Debug, Serialize)]
pub struct RelationGroup {
    pub rel_type : String,
    pub name : String,
    pub relations : Vec<Relation>
}

#[derive(Clone, Debug, Serialize)]
pub struct LemmaFrames {
    pub lemma : String,
    pub frames : Vec<String>
}

/// Everything the presentation layer reads from a view.
#[derive(Clone, Debug, Serialize)]
pub struct SynsetDisplay {
    pub id : String,
    pub pos : String,
    pub pos_name : String,
    pub definition : String,
    pub examples : Vec<String>,
    pub lemmas : Vec<String>,
    pub state : ViewState,
    pub failed : bool,
    pub relation_groups : Vec<RelationGroup>,
    pub exhausted : bool,
    pub pages : usize,
    pub has_subcats : bool,
    pub sentences : Vec<String>,
    pub underlined : Vec<LemmaFrames>
}

pub fn relation_name(rel_type : &str) -> String {
    let name = match rel_type {
        "hypernym" => "Hypernym",
        "hyponym" => "Hyponym",
        "instance_hypernym" => "Instance of",
        "instance_hyponym" => "Has instance",
        "mero_part" => "Has part",
        "holo_part" => "Part of",
        "mero_member" => "Has member",
        "holo_member" => "Member of",
        "mero_substance" => "Has substance",
        "holo_substance" => "Substance of",
        "entails" => "Entails",
        "is_entailed_by" => "Entailed by",
        "causes" => "Causes",
        "is_caused_by" => "Caused by",
        "similar" => "Similar to",
        "also" => "See also",
        "antonym" => "Antonym",
        "attribute" => "Attribute",
        "derivation" => "Derived form",
        "pertainym" => "Pertains to",
        "domain_topic" => "Topic domain",
        "has_domain_topic" => "In topic domain",
        "domain_region" => "Region domain",
        "has_domain_region" => "In region domain",
        "exemplifies" => "Usage domain",
        "is_exemplified_by" => "In usage domain",
        other => {
            let spaced = other.replace('_', " ");
            let mut chars = spaced.chars();
            return match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => String::new()
            };
        }
    };
    name.to_string()
}

pub struct SynsetView {
    synset : Option<Synset>,
    state : ViewState,
    pager : RelationPager,
    page_size : usize,
    generation : u64
}

impl SynsetView {
    pub fn new(page_size : usize) -> SynsetView {
        SynsetView {
            synset : None,
            state : ViewState::Idle,
            pager : RelationPager::new(Vec::new(), page_size),
            page_size : page_size,
            generation : 0
        }
    }

    pub fn state(&self) -> ViewState { self.state }

    pub fn synset(&self) -> Option<&Synset> { self.synset.as_ref() }

    /// Starts a new binding. Any fetch issued for an earlier binding is
    /// ignored when it completes.
    pub fn bind(&mut self, synset : Synset) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Idle;
        self.pager = RelationPager::new(Vec::new(), self.page_size);
        let ticket = FetchTicket {
            synset_id : synset.id.clone(),
            generation : self.generation
        };
        self.synset = Some(synset);
        self.state = ViewState::Loading;
        ticket
    }

    fn accepts(&self, ticket : &FetchTicket) -> bool {
        self.state == ViewState::Loading
            && ticket.generation == self.generation
            && self.synset.as_ref().map_or(false, |s| s.id == ticket.synset_id)
    }

    /// Applies a fetch result. Returns false if the result was stale.
    pub fn complete(&mut self, ticket : FetchTicket,
                    result : Result<Vec<Relation>, WordNetError>) -> bool {
        if !self.accepts(&ticket) {
            debug!(synset = %ticket.synset_id, "discarding stale relation fetch");
            return false;
        }
        match result {
            Ok(relations) => {
                self.pager = RelationPager::new(relations, self.page_size);
                info!(synset = %ticket.synset_id, relations = self.pager.unique().len(),
                      "relations loaded");
                self.state = ViewState::Ready;
            },
            Err(e) => {
                warn!(synset = %ticket.synset_id, error = %e, "could not fetch relations");
                self.pager = RelationPager::new(Vec::new(), self.page_size);
                self.state = ViewState::Failed;
            }
        }
        true
    }

    /// Binds `synset` and waits for its relations from `source`.
    pub async fn load<S : WordNetSource + ?Sized>(&mut self, source : &S,
                                                    synset : Synset) -> ViewState {
        let ticket = self.bind(synset);
        let result = source.fetch_relations(ticket.synset_id()).await;
        self.complete(ticket, result);
        self.state
    }

    pub fn relations(&self) -> &[Relation] {
        self.pager.visible()
    }

    pub fn extend(&mut self) {
        self.pager.extend()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pager.is_exhausted()
    }

    pub fn has_subcats(&self) -> bool {
        self.synset.as_ref().map_or(false, has_subcats)
    }

    pub fn subcat_groups(&self) -> Vec<SubcatGroup> {
        self.synset.as_ref().map(extract).unwrap_or_default()
    }

    pub fn subcat_sentences(&self) -> Vec<String> {
        self.subcat_groups().iter().map(|g| g.render()).collect()
    }

    /// Each lemma's frames with the lemma marked. `escape` is applied to the
    /// frame and lemma text before markup is added.
    pub fn underlined<F : Fn(&str) -> String>(&self, escape : F) -> Vec<LemmaFrames> {
        match self.synset {
            Some(ref synset) => synset.lemmas.iter()
                .filter(|l| !l.subcats.is_empty())
                .map(|l| {
                    let lemma = escape(&l.lemma);
                    LemmaFrames {
                        lemma : l.lemma.clone(),
                        frames : l.subcats.iter()
                            .map(|s| SubcatTemplate::parse(&escape(s)).underline(&lemma))
                            .collect()
                    }
                }).collect(),
            None => Vec::new()
        }
    }

    fn relation_groups(&self) -> Vec<RelationGroup> {
        let mut groups : Vec<RelationGroup> = Vec::new();
        for rel in self.relations() {
            match groups.iter_mut().find(|g| g.rel_type == rel.rel_type) {
                Some(group) => group.relations.push(rel.clone()),
                None => groups.push(RelationGroup {
                    rel_type : rel.rel_type.clone(),
                    name : relation_name(&rel.rel_type),
                    relations : vec![rel.clone()]
                })
            }
        }
        groups
    }

    pub fn display<F : Fn(&str) -> String>(&self, escape : F) -> Option<SynsetDisplay> {
        let synset = self.synset.as_ref()?;
        Some(SynsetDisplay {
            id : synset.id.clone(),
            pos : synset.pos.as_short_str().to_string(),
            pos_name : synset.pos.as_long_str().to_string(),
            definition : synset.definition.clone(),
            examples : synset.examples.clone(),
            lemmas : synset.lemma_names(),
            state : self.state,
            failed : self.state == ViewState::Failed,
            relation_groups : self.relation_groups(),
            exhausted : self.is_exhausted(),
            pages : self.pager.pages(),
            has_subcats : self.has_subcats(),
            sentences : self.subcat_sentences(),
            underlined : self.underlined(escape)
        })
    }
}

impl Default for SynsetView {
    fn default() -> Self {
        SynsetView::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::model::{Lemma, PartOfSpeech};

    struct FakeSource {
        relations : Vec<Relation>,
        fail : bool,
        calls : AtomicUsize
    }

    impl FakeSource {
        fn new(targets : &[&str]) -> FakeSource {
            FakeSource {
                relations : targets.iter().map(|t| rel(t)).collect(),
                fail : false,
                calls : AtomicUsize::new(0)
            }
        }

        fn failing() -> FakeSource {
            FakeSource { fail : true, ..FakeSource::new(&[]) }
        }
    }

    #[async_trait]
    impl WordNetSource for FakeSource {
        async fn lookup(&self, _index : &str, _key : &str) -> Result<Vec<Synset>, WordNetError> {
            Ok(Vec::new())
        }

        async fn fetch_relations(&self, _id : &str) -> Result<Vec<Relation>, WordNetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(WordNetError::Status { status : 500, url : "http://test/json_rel".to_string() })
            } else {
                Ok(self.relations.clone())
            }
        }
    }

    fn rel(target : &str) -> Relation {
        Relation {
            target : target.to_string(),
            rel_type : "hyponym".to_string(),
            lemmas : Vec::new(),
            definition : String::new()
        }
    }

    fn synset(id : &str) -> Synset {
        Synset {
            id : id.to_string(),
            pos : PartOfSpeech::Verb,
            definition : "take in food".to_string(),
            examples : Vec::new(),
            lemmas : vec![
                Lemma { lemma : "eat".to_string(), subcats : vec!["Somebody ----s".to_string()] },
                Lemma { lemma : "give up".to_string(), subcats : vec!["Somebody ----s".to_string()] },
                Lemma { lemma : "feed".to_string(), subcats : Vec::new() }
            ]
        }
    }

    fn no_escape(s : &str) -> String { s.to_string() }

    #[tokio::test]
    async fn loads_and_pages_relations() {
        let source = FakeSource::new(&["a", "b", "a", "c", "d"]);
        let mut view = SynsetView::new(2);
        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(view.load(&source, synset("s1")).await, ViewState::Ready);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        let targets : Vec<&str> = view.relations().iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, vec!["a", "b"]);
        view.extend();
        assert_eq!(view.relations().len(), 4);
        assert!(view.is_exhausted());
    }

    #[tokio::test]
    async fn failure_leaves_subcats_usable() {
        let source = FakeSource::failing();
        let mut view = SynsetView::default();
        assert_eq!(view.load(&source, synset("s1")).await, ViewState::Failed);
        assert!(view.relations().is_empty());
        assert!(view.is_exhausted());
        assert_eq!(view.subcat_sentences(), vec!["Somebody eats/gives up"]);
        let display = view.display(no_escape).unwrap();
        assert!(display.failed);
        assert!(display.relation_groups.is_empty());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut view = SynsetView::new(10);
        let first = view.bind(synset("s1"));
        let second = view.bind(synset("s2"));
        assert!(!view.complete(first, Ok(vec![rel("x")])));
        assert_eq!(view.state(), ViewState::Loading);
        assert!(view.relations().is_empty());
        assert!(view.complete(second.clone(), Ok(vec![rel("y")])));
        assert_eq!(view.state(), ViewState::Ready);
        assert_eq!(view.relations()[0].target, "y");
        // a terminal state is entered once per bind
        assert!(!view.complete(second, Err(WordNetError::UnknownIndex("x".to_string()))));
        assert_eq!(view.state(), ViewState::Ready);
    }

    #[test]
    fn rebinding_same_synset_ignores_old_ticket() {
        let mut view = SynsetView::new(10);
        let first = view.bind(synset("s1"));
        let _second = view.bind(synset("s1"));
        assert_eq!(first.synset_id(), "s1");
        assert!(!view.complete(first, Ok(vec![rel("x")])));
    }

    #[tokio::test]
    async fn rebind_resets_pagination() {
        let source = FakeSource::new(&["a", "b", "c"]);
        let mut view = SynsetView::new(1);
        view.load(&source, synset("s1")).await;
        view.extend();
        view.extend();
        assert!(view.is_exhausted());
        view.load(&source, synset("s2")).await;
        assert_eq!(view.relations().len(), 1);
        assert!(!view.is_exhausted());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn underlines_each_lemma() {
        let mut view = SynsetView::new(10);
        view.bind(synset("s1"));
        let frames = view.underlined(no_escape);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].frames, vec!["Somebody <span class=\"underline\">eat</span>s"]);
        assert_eq!(frames[1].lemma, "give up");
        assert_eq!(frames[1].frames, vec!["Somebody <span class=\"underline\">give</span>s up"]);
    }

    #[test]
    fn escapes_before_marking() {
        let mut s = synset("s1");
        s.lemmas = vec![Lemma { lemma : "a<b".to_string(), subcats : vec!["<i>----</i>".to_string()] }];
        let mut view = SynsetView::new(10);
        view.bind(s);
        let escape = |t : &str| t.replace('<', "&lt;").replace('>', "&gt;");
        let frames = view.underlined(escape);
        assert_eq!(frames[0].frames,
                   vec!["&lt;i&gt;<span class=\"underline\">a&lt;b</span>&lt;/i&gt;"]);
    }

    #[tokio::test]
    async fn display_groups_relations_by_type() {
        let mut source = FakeSource::new(&[]);
        source.relations = vec![
            Relation { rel_type : "hypernym".to_string(), ..rel("h") },
            rel("a"),
            Relation { rel_type : "hypernym".to_string(), ..rel("h2") },
            rel("b")
        ];
        let mut view = SynsetView::new(10);
        view.load(&source, synset("s1")).await;
        let display = view.display(no_escape).unwrap();
        assert_eq!(display.relation_groups.len(), 2);
        assert_eq!(display.relation_groups[0].name, "Hypernym");
        assert_eq!(display.relation_groups[0].relations.len(), 2);
        assert_eq!(display.relation_groups[1].name, "Hyponym");
        assert_eq!(display.pages, 1);
        assert!(display.exhausted);
        assert!(display.has_subcats);
        assert_eq!(display.pos_name, "verb");
    }

    #[test]
    fn unbound_view_has_nothing_to_show() {
        let view = SynsetView::default();
        assert!(view.display(no_escape).is_none());
        assert!(view.subcat_sentences().is_empty());
        assert!(!view.has_subcats());
    }

    #[test]
    fn names_relations() {
        assert_eq!(relation_name("instance_hypernym"), "Instance of");
        assert_eq!(relation_name("some_new_rel"), "Some new rel");
        assert_eq!(relation_name(""), "");
    }
}
