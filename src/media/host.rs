// SPDX-License-Identifier: MPL-2.0
//! Object URL registry for uploaded files.

use super::{MediaHost, ObjectUrl, UploadedFile};
use std::collections::HashMap;
use std::path::PathBuf;
use url::Url;

const OBJECT_URL_PREFIX: &str = "blob:iced-reel/";

/// Hands out `blob:iced-reel/<n>` URLs and remembers the file behind each.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    next_id: u64,
    live: HashMap<ObjectUrl, PathBuf>,
}

impl ObjectUrlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs allocated and not yet revoked.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_live(&self, url: &ObjectUrl) -> bool {
        self.live.contains_key(url)
    }
}

impl MediaHost for ObjectUrlRegistry {
    fn create_object_url(&mut self, file: &UploadedFile) -> ObjectUrl {
        self.next_id += 1;
        let url = ObjectUrl::new(format!("{OBJECT_URL_PREFIX}{}", self.next_id));
        self.live.insert(url.clone(), file.path.clone());
        tracing::debug!(%url, path = %file.path.display(), "object url created");
        url
    }

    fn revoke_object_url(&mut self, url: &ObjectUrl) {
        if self.live.remove(url).is_some() {
            tracing::debug!(%url, "object url revoked");
        } else {
            tracing::warn!(%url, "revoking unknown object url");
        }
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        if url.starts_with("blob:") {
            return self.live.get(&ObjectUrl::new(url)).cloned();
        }
        match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "file" => parsed.to_file_path().ok(),
            // A single-letter scheme is a Windows drive letter.
            Ok(parsed) if parsed.scheme().len() == 1 => Some(PathBuf::from(url)),
            Ok(_) => None,
            Err(_) => Some(PathBuf::from(url)),
        }
    }
}
