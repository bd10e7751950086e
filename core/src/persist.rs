use crate::{IdfTable, IndexError, InvertedIndex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: usize,
    pub num_terms: usize,
    pub created_at: String,
    pub version: u32,
}

/// Fixed artifact locations under an index root. Every build overwrites them.
pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn inverted_index(&self) -> PathBuf { self.root.join("inverted_index.json") }
    pub fn idf(&self) -> PathBuf { self.root.join("idf.json") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IndexError> {
    let io_err = |source: std::io::Error| IndexError::Io { path: path.to_path_buf(), source };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, IndexError> {
    let f = File::open(path).map_err(|source| IndexError::Io { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}

pub fn save_inverted_index(paths: &IndexPaths, index: &InvertedIndex) -> Result<(), IndexError> {
    write_json(&paths.inverted_index(), index)
}

pub fn load_inverted_index(paths: &IndexPaths) -> Result<InvertedIndex, IndexError> {
    read_json(&paths.inverted_index())
}

pub fn save_idf(paths: &IndexPaths, idf: &IdfTable) -> Result<(), IndexError> {
    write_json(&paths.idf(), idf)
}

pub fn load_idf(paths: &IndexPaths) -> Result<IdfTable, IndexError> {
    read_json(&paths.idf())
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<(), IndexError> {
    write_json(&paths.meta(), meta)
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile, IndexError> {
    read_json(&paths.meta())
}

/// Writes the inverted index, IDF table and build metadata, replacing any previous build.
pub fn save_index(paths: &IndexPaths, index: &InvertedIndex, idf: &IdfTable, num_docs: usize) -> Result<MetaFile, IndexError> {
    create_dir_all(&paths.root).map_err(|source| IndexError::Io { path: paths.root.clone(), source })?;
    save_inverted_index(paths, index)?;
    save_idf(paths, idf)?;
    let meta = MetaFile {
        num_docs,
        num_terms: index.num_terms(),
        created_at: time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| "".into()),
        version: 1,
    };
    save_meta(paths, &meta)?;
    Ok(meta)
}

/// Load everything a consumer of the index needs.
pub fn load_index(paths: &IndexPaths) -> Result<(InvertedIndex, IdfTable, MetaFile), IndexError> {
    let index = load_inverted_index(paths)?;
    let idf = load_idf(paths)?;
    let meta = load_meta(paths)?;
    Ok((index, idf, meta))
}
