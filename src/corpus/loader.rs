// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading documents from files and JSON.
//!
//! A fixture directory holds one plain-text file per document; the file
//! name is the id. Reading files is the only expensive part and it is
//! embarrassingly parallel, so with the `parallel` feature each file is read
//! on the rayon pool. Results are collected in request order, which keeps
//! tie-breaking in the ranker deterministic.

use std::fs;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::validate_documents;
use crate::error::{Error, Result};
use crate::types::{Document, Payload};

/// Load the named files from `dir`, in the order given.
///
/// Fails on the first missing or unreadable file, and on duplicate ids.
pub fn load_fixtures<S: AsRef<str> + Sync>(dir: &Path, ids: &[S]) -> Result<Vec<Document>> {
    let read_one = |id: &S| -> Result<Document> {
        let id = id.as_ref();
        let path = dir.join(id);
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Document::new(id, text))
    };

    #[cfg(feature = "parallel")]
    let documents = ids.par_iter().map(read_one).collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let documents = ids.iter().map(read_one).collect::<Result<Vec<_>>>()?;

    validate_documents(&documents)?;
    debug!(dir = %dir.display(), count = documents.len(), "loaded fixture documents");
    Ok(documents)
}

/// Load every regular file in `dir`, sorted by file name.
///
/// Subdirectories are skipped. Sorting makes the document order (and so
/// tie-breaking) independent of the filesystem's listing order.
pub fn load_directory(dir: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| Error::InvalidFileName(entry.path()))?;
        ids.push(name);
    }
    ids.sort();

    load_fixtures(dir, &ids)
}

/// Parse a `{"documents": [...]}` payload.
pub fn load_payload<R: Read>(reader: R) -> Result<Vec<Document>> {
    let payload: Payload = serde_json::from_reader(reader)?;
    validate_documents(&payload.documents)?;
    debug!(count = payload.documents.len(), "loaded payload documents");
    Ok(payload.documents)
}

/// Read a payload from a file path, or stdin when the path is `-`.
pub fn load_payload_path(path: &Path) -> Result<Vec<Document>> {
    if path.as_os_str() == "-" {
        return load_payload(std::io::stdin().lock());
    }
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    load_payload(std::io::BufReader::new(file))
}
