//! Browsing a WordNet: synsets, the relations leaving them and the verb
//! frames of their lemmas.
//!
//! Relations come from a [`WordNetSource`], either a JSON dump held in memory
//! ([`WordNet`]) or a WordNet server ([`RemoteWordNet`]). A [`SynsetView`]
//! fetches them once per synset, pages them with a [`RelationPager`] and
//! renders subcat frames with the inflection rules in [`morphology`].

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod morphology;
pub mod pager;
pub mod source;
pub mod subcat;
pub mod template;
pub mod view;
pub mod wordnet;

pub use error::WordNetError;
pub use model::{Lemma, PartOfSpeech, Relation, Synset};
pub use pager::{RelationPager, DEFAULT_PAGE_SIZE};
pub use source::{RemoteWordNet, WordNetSource};
pub use subcat::SubcatGroup;
pub use template::{Placeholder, SubcatTemplate};
pub use view::{FetchTicket, SynsetDisplay, SynsetView, ViewState};
pub use wordnet::WordNet;
