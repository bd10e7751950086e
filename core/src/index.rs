use crate::pages::PageRecord;
use crate::tokenizer::page_terms;
use crate::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Document identifier as it appears in posting lists (a page file name).
pub type DocId = String;

/// term -> documents containing it, in corpus order. Presence only, no frequencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    pub postings: BTreeMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Vec::len)
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}

/// term -> ln(N / df).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdfTable {
    pub scores: BTreeMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    pub fn len(&self) -> usize { self.scores.len() }
    pub fn is_empty(&self) -> bool { self.scores.is_empty() }
}

/// Batch accumulator. Documents are added in corpus order, IDF is computed once in `finish`.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: InvertedIndex,
    num_docs: usize,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Builds over the whole corpus in the order given.
    pub fn build<'a, I>(corpus: I) -> Result<(InvertedIndex, IdfTable), IndexError>
    where
        I: IntoIterator<Item = &'a PageRecord>,
    {
        let mut builder = Self::new();
        for page in corpus {
            builder.add_document(&page.doc_id(), page_terms(&page.content));
        }
        builder.finish()
    }

    pub fn add_document(&mut self, doc_id: &str, terms: HashSet<String>) {
        self.num_docs += 1;
        for term in terms {
            let list = self.index.postings.entry(term).or_default();
            // same doc added twice in a row must not double-count
            if list.last().map(String::as_str) != Some(doc_id) {
                list.push(doc_id.to_string());
            }
        }
    }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn finish(self) -> Result<(InvertedIndex, IdfTable), IndexError> {
        if self.num_docs == 0 {
            return Err(IndexError::EmptyCorpus);
        }
        let n = self.num_docs as f64;
        let scores = self
            .index
            .postings
            .iter()
            .map(|(term, docs)| (term.clone(), (n / docs.len() as f64).ln()))
            .collect();
        tracing::debug!(num_docs = self.num_docs, num_terms = self.index.num_terms(), "computed idf");
        Ok((self.index, IdfTable { scores }))
    }
}
