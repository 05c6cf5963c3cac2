use std::collections::HashSet;

use crate::model::Relation;

pub const DEFAULT_PAGE_SIZE : usize = 100;

/// The relations of one synset, deduplicated by target and revealed a page
/// at a time. The visible boundary only moves forward.
#[derive(Clone, Debug)]
pub struct RelationPager {
    unique : Vec<Relation>,
    visible : usize,
    page_size : usize
}

impl RelationPager {
    pub fn new(relations : Vec<Relation>, page_size : usize) -> RelationPager {
        let page_size = page_size.max(1);
        let mut seen = HashSet::new();
        let unique : Vec<Relation> = relations.into_iter()
            .filter(|r| seen.insert(r.target.clone()))
            .collect();
        let visible = page_size.min(unique.len());
        RelationPager {
            unique : unique,
            visible : visible,
            page_size : page_size
        }
    }

    pub fn empty() -> RelationPager {
        RelationPager::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }

    pub fn visible(&self) -> &[Relation] {
        &self.unique[..self.visible]
    }

    pub fn pending(&self) -> &[Relation] {
        &self.unique[self.visible..]
    }

    pub fn unique(&self) -> &[Relation] {
        &self.unique
    }

    pub fn page_size(&self) -> usize { self.page_size }

    /// Number of pages currently shown.
    pub fn pages(&self) -> usize {
        self.visible.div_ceil(self.page_size)
    }

    pub fn extend(&mut self) {
        self.visible = (self.visible + self.page_size).min(self.unique.len());
    }

    pub fn is_exhausted(&self) -> bool {
        self.visible == self.unique.len()
    }
}

impl Default for RelationPager {
    fn default() -> Self {
        RelationPager::empty()
    }
}
