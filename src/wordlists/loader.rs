//! Word list loading utilities
//!
//! Loads a word list from the embedded constant, a file, or a single HTTP fetch.

use super::WordList;
use super::embedded::WORDS;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Newline-delimited list used by the web version of the game
pub const DEFAULT_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListLocation {
    /// Compiled into the binary
    Embedded,
    /// Local newline-delimited file
    File(PathBuf),
    /// Plain-text HTTP(S) resource
    Url(String),
}

impl FromStr for WordListLocation {
    type Err = std::convert::Infallible;

    /// `embedded`, `url` (the default remote list), any `http(s)://` URL, or a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            "url" => Self::Url(DEFAULT_WORD_LIST_URL.to_string()),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Self::Url(url.to_string())
            }
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordListLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Failure to obtain a usable word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to fetch word list from {url}: {source}")]
    Http { url: String, source: reqwest::Error },
    #[error("word list from {0} is empty")]
    Empty(WordListLocation),
}

/// Load a word list from any location
///
/// # Errors
///
/// Returns `LoadError` if the resource cannot be read or fetched, or holds no words.
pub fn load(location: &WordListLocation) -> Result<WordList, LoadError> {
    let list = match location {
        WordListLocation::Embedded => embedded(),
        WordListLocation::File(path) => load_from_file(path)?,
        WordListLocation::Url(url) => fetch_from_url(url)?,
    };

    if list.is_empty() {
        return Err(LoadError::Empty(location.clone()));
    }

    info!(%location, words = list.len(), "loaded word list");
    Ok(list)
}

/// The word list compiled into the binary
#[must_use]
pub fn embedded() -> WordList {
    WordList::from_words(WORDS)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(WordList::parse(&content))
}

/// Fetch words with a single blocking GET
///
/// # Errors
///
/// Returns `LoadError::Http` on connection failure, a non-success status, or an
/// unreadable body.
pub fn fetch_from_url(url: &str) -> Result<WordList, LoadError> {
    let http = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    debug!(url, "fetching word list");
    let body = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(http)?;

    Ok(WordList::parse(&body))
}
