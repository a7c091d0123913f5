// * Table Builder and Ranker
// * One record per item node, fixed column order, then a stable descending sort on stars.

use crate::refinery::record::{Record, RecordExtractor};
use scraper::ElementRef;

/// Ordered collection of records with the schema `[Repository, Language, Stars, Forks]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The first `n` rows (fewer if the dataset is shorter)
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Reorders by stars, descending. Ties keep their input order.
    pub fn rank(mut self) -> Self {
        self.rank_in_place();
        self
    }

    pub fn rank_in_place(&mut self) {
        // * slice::sort_by is stable
        self.records.sort_by(|a, b| b.stars.cmp(&a.stars));
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub struct TableBuilder;

impl TableBuilder {
    /// Extracts every item in order. No filtering, no deduplication.
    pub fn build<'a, I>(items: I) -> Dataset
    where
        I: IntoIterator<Item = ElementRef<'a>>,
    {
        items
            .into_iter()
            .map(|item| RecordExtractor::extract(&item))
            .collect()
    }
}
