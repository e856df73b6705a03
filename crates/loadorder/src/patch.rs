//! Output patch: the records overridden during a run.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use serde::Serialize;
use spelltome_records::models::{Book, FormKey, ModKey};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tracing::instrument;

/// An append-only set of record overrides, written out as a single plugin.
///
/// Holds at most one override per [`FormKey`]; asking for the same record
/// twice hands back the override created the first time.
#[derive(Debug, Serialize)]
pub struct Patch {
    mod_key: ModKey,
    books: Vec<Book>,
    #[serde(skip)]
    index: HashMap<FormKey, usize>,
}
impl Patch {
    pub fn new(mod_key: ModKey) -> Self {
        Self {
            mod_key,
            books: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn mod_key(&self) -> &ModKey {
        &self.mod_key
    }

    /// Overridden books, in the order they were first added.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the override for `book`, copying the record into the patch
    /// first if it isn't there yet.
    pub fn get_or_add_override(&mut self, book: &Book) -> &mut Book {
        let position = match self.index.get(&book.form_key) {
            Some(&position) => position,
            None => {
                self.books.push(book.clone());
                let position = self.books.len() - 1;
                self.index.insert(book.form_key.clone(), position);
                position
            },
        };
        &mut self.books[position]
    }

    /// Serializes the patch as pretty-printed JSON.
    pub fn write_json(&self, writer: impl Write) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }

    /// Writes the patch to `path`, replacing any existing file.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), records = self.len()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).or_raise(|| ErrorKind::Write(path.to_path_buf()))?;
        }
        let file = std::fs::File::create(path).or_raise(|| ErrorKind::Write(path.to_path_buf()))?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_json(&mut writer).or_raise(|| ErrorKind::Write(path.to_path_buf()))?;
        writer.flush().or_raise(|| ErrorKind::Write(path.to_path_buf()))?;
        tracing::info!("Patch written");
        Ok(())
    }
}
