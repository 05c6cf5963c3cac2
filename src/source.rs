//! Where synsets and their relations come from.
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::WordNetError;
use crate::model::{validate_relations, validate_synsets, Relation, Synset};

#[async_trait]
pub trait WordNetSource : Send + Sync {
    /// Finds the synsets stored under `key` in `index` (`id` or `lemma`).
    async fn lookup(&self, index : &str, key : &str) -> Result<Vec<Synset>, WordNetError>;

    /// Lists the relations leaving `synset_id`, in upstream order. Targets
    /// may repeat.
    async fn fetch_relations(&self, synset_id : &str) -> Result<Vec<Relation>, WordNetError>;
}

/// A WordNet served over HTTP, e.g. `http://localhost:8000` answering
/// `/json/<index>/<key>` and `/json_rel/<id>`.
pub struct RemoteWordNet {
    client : Client,
    base : Url
}

impl RemoteWordNet {
    pub fn new(base : &str) -> Result<RemoteWordNet, WordNetError> {
        let base = Url::parse(base)
            .map_err(|e| WordNetError::Config(format!("Bad remote URL {}: {}", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(WordNetError::Config(format!("Remote URL cannot be a base: {}", base)));
        }
        Ok(RemoteWordNet {
            client : Client::new(),
            base : base
        })
    }

    fn url(&self, segments : &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T : DeserializeOwned>(&self, url : Url) -> Result<T, WordNetError> {
        debug!(%url, "fetching");
        let res = self.client.get(url.clone()).send().await?;
        if !res.status().is_success() {
            return Err(WordNetError::Status {
                status : res.status().as_u16(),
                url : url.to_string()
            });
        }
        Ok(res.json::<T>().await?)
    }
}

#[async_trait]
impl WordNetSource for RemoteWordNet {
    async fn lookup(&self, index : &str, key : &str) -> Result<Vec<Synset>, WordNetError> {
        let synsets = self.get_json(self.url(&["json", index, key])).await?;
        Ok(validate_synsets(key, synsets))
    }

    async fn fetch_relations(&self, synset_id : &str) -> Result<Vec<Relation>, WordNetError> {
        let relations = self.get_json(self.url(&["json_rel", synset_id])).await?;
        Ok(validate_relations(synset_id, relations))
    }
}
