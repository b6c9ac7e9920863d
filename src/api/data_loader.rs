use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::core::{MatchRecord, RawPayload, normalize};
use crate::error::{ViewerError, ViewerResult};

pub const DEFAULT_DATASET_ID: &str = "realdata";
pub const DEFAULT_DATASET_BASE: &str = "/data/actionstats";
const DATASET_QUERY_PARAM: &str = "data";

/// Decodes and normalizes one dataset document.
///
/// Decoding failures, including a missing `p1`/`p2`, are reported as
/// [`ViewerError::MalformedDataset`].
pub fn load_from_str(input: &str) -> ViewerResult<MatchRecord> {
    let raw: RawPayload = serde_json::from_str(input)
        .map_err(|err| ViewerError::malformed(format!("failed to decode dataset json: {err}")))?;
    normalize(raw)
}

pub fn load_from_reader<Rd: Read>(reader: Rd) -> ViewerResult<MatchRecord> {
    let raw: RawPayload = serde_json::from_reader(reader).map_err(|err| {
        if err.is_io() {
            ViewerError::Io(err.into())
        } else {
            ViewerError::malformed(format!("failed to decode dataset json: {err}"))
        }
    })?;
    normalize(raw)
}

pub fn load_from_path(path: impl AsRef<Path>) -> ViewerResult<MatchRecord> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Single best-effort fetch of a dataset document; no retry.
#[cfg(feature = "http-fetch")]
pub fn fetch_dataset(url: &str) -> ViewerResult<MatchRecord> {
    debug!(url, "fetching dataset");
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|err| ViewerError::Fetch(err.to_string()))?;
    let body = response
        .text()
        .map_err(|err| ViewerError::Fetch(err.to_string()))?;
    load_from_str(&body)
}

/// Resolves which dataset document a viewer page shows.
///
/// The id comes from the page's `data` query parameter and maps onto
/// `<base>/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocator {
    base: String,
}

impl Default for DatasetLocator {
    fn default() -> Self {
        Self {
            base: DEFAULT_DATASET_BASE.to_owned(),
        }
    }
}

impl DatasetLocator {
    pub fn new(base: impl Into<String>) -> ViewerResult<Self> {
        let base = base.into().trim_end_matches('/').to_owned();
        if base.is_empty() {
            return Err(ViewerError::InvalidQuery(
                "dataset base path must not be empty".to_owned(),
            ));
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Dataset id named by `page_url`, or [`DEFAULT_DATASET_ID`] when absent.
    pub fn dataset_id(&self, page_url: &str) -> ViewerResult<String> {
        let url = Url::parse(page_url)
            .map_err(|err| ViewerError::InvalidQuery(format!("invalid page url: {err}")))?;
        let id = url
            .query_pairs()
            .find(|(key, _)| key == DATASET_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET_ID.to_owned());
        validate_dataset_id(&id)?;
        Ok(id)
    }

    /// Path of the dataset document `page_url` asks for.
    pub fn resolve(&self, page_url: &str) -> ViewerResult<String> {
        let id = self.dataset_id(page_url)?;
        Ok(self.path_for(&id))
    }

    #[must_use]
    pub fn path_for(&self, id: &str) -> String {
        format!("{}/{id}.json", self.base)
    }
}

fn validate_dataset_id(id: &str) -> ViewerResult<()> {
    if id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(ViewerError::InvalidQuery(format!(
            "dataset id `{id}` must not contain path separators"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DATASET_ID, DatasetLocator};

    #[test]
    fn missing_query_falls_back_to_default_id() {
        let locator = DatasetLocator::default();
        let id = locator
            .dataset_id("http://localhost:8000/index.html")
            .expect("valid url");
        assert_eq!(id, DEFAULT_DATASET_ID);
    }

    #[test]
    fn resolves_query_id_under_base() {
        let locator = DatasetLocator::new("/replays/").expect("valid base");
        let path = locator
            .resolve("http://localhost:8000/?data=ladder_07&lang=en")
            .expect("valid query");
        assert_eq!(path, "/replays/ladder_07.json");
    }

    #[test]
    fn rejects_traversal_ids() {
        let locator = DatasetLocator::default();
        let err = locator
            .resolve("http://localhost/?data=..%2Fsecrets")
            .expect_err("traversal must fail");
        assert!(err.to_string().contains("path separators"));
    }
}
