use crate::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub type PageId = u64;

pub const VISITED_FILE: &str = "visited.txt";

/// One persisted page. `source_url` is only known for pages saved in this process;
/// pages read back from disk carry `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub id: PageId,
    pub source_url: Option<String>,
    pub content: String,
    pub storage_path: PathBuf,
}

impl PageRecord {
    /// Identifier used in posting lists, the page's file name.
    pub fn doc_id(&self) -> String {
        page_file_name(self.id)
    }
}

pub fn page_file_name(id: PageId) -> String {
    format!("page_{id}.html")
}

/// Only names `save` itself would produce; `page_01.html` or `page_+1.html` are not pages.
fn parse_page_id(name: &str) -> Option<PageId> {
    let id: PageId = name.strip_prefix("page_")?.strip_suffix(".html")?.parse().ok()?;
    (page_file_name(id) == name).then_some(id)
}

/// Flat directory of `page_{id}.html` files plus the visited-URL list.
#[derive(Debug)]
pub struct PageStore {
    pages_dir: PathBuf,
    visited_path: PathBuf,
    next_id: PageId,
}

impl PageStore {
    /// Creates the pages directory if needed. Ids restart at 1 for every store.
    pub fn create<P: AsRef<Path>>(pages_dir: P) -> Result<Self, StoreError> {
        let pages_dir = pages_dir.as_ref().to_path_buf();
        fs::create_dir_all(&pages_dir).map_err(|source| StoreError::CreateDir { path: pages_dir.clone(), source })?;
        Ok(Self::at(pages_dir))
    }

    /// Opens an existing pages directory; a missing directory is an error.
    pub fn open<P: AsRef<Path>>(pages_dir: P) -> Result<Self, StoreError> {
        let pages_dir = pages_dir.as_ref().to_path_buf();
        if !pages_dir.is_dir() {
            return Err(StoreError::MissingDir(pages_dir));
        }
        Ok(Self::at(pages_dir))
    }

    fn at(pages_dir: PathBuf) -> Self {
        let visited_path = pages_dir.parent().unwrap_or(Path::new(".")).join(VISITED_FILE);
        Self { pages_dir, visited_path, next_id: 1 }
    }

    pub fn with_visited_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.visited_path = path.as_ref().to_path_buf();
        self
    }

    pub fn pages_dir(&self) -> &Path { &self.pages_dir }
    pub fn visited_path(&self) -> &Path { &self.visited_path }

    /// Writes `content` under the next id. The id is only consumed when the write succeeds.
    pub fn save(&mut self, url: &str, content: &str) -> Result<PageRecord, StoreError> {
        let id = self.next_id;
        let storage_path = self.pages_dir.join(page_file_name(id));
        fs::write(&storage_path, content).map_err(|source| StoreError::Io { path: storage_path.clone(), source })?;
        self.next_id += 1;
        Ok(PageRecord { id, source_url: Some(url.to_string()), content: content.to_string(), storage_path })
    }

    /// Everything under the pages directory, in ascending id order, whichever run wrote it.
    pub fn list_corpus(&self) -> Result<Vec<PageRecord>, StoreError> {
        let mut found: Vec<(PageId, PathBuf)> = Vec::new();
        for entry in WalkDir::new(&self.pages_dir).min_depth(1).max_depth(1).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() { continue; }
            let id = entry.file_name().to_str().and_then(parse_page_id);
            match id {
                Some(id) => found.push((id, entry.into_path())),
                None => tracing::debug!(path = %entry.path().display(), "ignoring non-page file"),
            }
        }
        found.sort_by_key(|(id, _)| *id);

        let mut corpus = Vec::with_capacity(found.len());
        for (id, path) in found {
            let bytes = fs::read(&path).map_err(|source| StoreError::Io { path: path.clone(), source })?;
            let content = String::from_utf8_lossy(&bytes).into_owned();
            corpus.push(PageRecord { id, source_url: None, content, storage_path: path });
        }
        Ok(corpus)
    }

    /// One URL per line, in the iteration order of `urls`.
    pub fn persist_visited<I, S>(&self, urls: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for url in urls {
            out.push_str(url.as_ref());
            out.push('\n');
        }
        fs::write(&self.visited_path, out).map_err(|source| StoreError::Io { path: self.visited_path.clone(), source })
    }
}
