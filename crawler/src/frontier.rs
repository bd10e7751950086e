use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of candidate URLs plus the set of URLs already processed.
///
/// Duplicates are allowed to sit in the queue; whether a URL was already handled is
/// decided when it is dequeued, not when it is enqueued.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    visited: HashSet<Url>,
}

impl Frontier {
    pub fn new() -> Self { Self::default() }

    pub fn enqueue(&mut self, url: Url) {
        self.queue.push_back(url);
    }

    pub fn dequeue_next(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    /// Returns false if the URL was already marked.
    pub fn mark_visited(&mut self, url: Url) -> bool {
        self.visited.insert(url)
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    pub fn has_capacity_for(current_visited_count: usize, max_pages: usize) -> bool {
        current_visited_count < max_pages
    }

    pub fn is_empty(&self) -> bool { self.queue.is_empty() }
    pub fn len(&self) -> usize { self.queue.len() }
    pub fn visited_count(&self) -> usize { self.visited.len() }

    pub fn visited(&self) -> impl Iterator<Item = &Url> {
        self.visited.iter()
    }
}
