//! Passage text already on disk, for offline use and debugging.

use std::cell::RefCell;
use std::io::{self, Read};
use std::path::PathBuf;
use versemark_engine::PassageSource;

/// Reads the whole passage from a file, or from stdin for `-`.
///
/// The query is ignored: the input is assumed to be the requested passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSource {
    Stdin,
    File(PathBuf),
}

impl LocalSource {
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            LocalSource::Stdin
        } else {
            LocalSource::File(arg)
        }
    }
}

impl PassageSource for LocalSource {
    type Error = io::Error;

    fn fetch_passage(&self, query: &str) -> io::Result<String> {
        log::debug!("reading {query:?} from {self:?}");
        match self {
            LocalSource::Stdin => {
                let mut raw = String::new();
                io::stdin().read_to_string(&mut raw)?;
                Ok(raw)
            }
            LocalSource::File(path) => std::fs::read_to_string(path),
        }
    }
}

/// Keeps a copy of the last passage fetched through it.
pub struct Recorded<'a, S> {
    inner: &'a S,
    raw: RefCell<Option<String>>,
}

impl<'a, S> Recorded<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            raw: RefCell::new(None),
        }
    }

    pub fn take(&self) -> Option<String> {
        self.raw.borrow_mut().take()
    }
}

impl<S: PassageSource> PassageSource for Recorded<'_, S> {
    type Error = S::Error;

    fn fetch_passage(&self, query: &str) -> Result<String, S::Error> {
        let raw = self.inner.fetch_passage(query)?;
        *self.raw.borrow_mut() = Some(raw.clone());
        Ok(raw)
    }
}
