// SPDX-License-Identifier: MPL-2.0
//! Active video source selection.
//!
//! An uploaded file wins over the externally supplied URL. The uploaded
//! file is referenced through an object URL owned here; it is released
//! exactly once, when replaced, removed or when the player goes away.

use crate::media::{MediaHost, MediaSource, ObjectUrl, UploadedFile};

#[derive(Debug, Clone)]
struct Upload {
    url: ObjectUrl,
    file: UploadedFile,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    external: Option<String>,
    upload: Option<Upload>,
}

impl State {
    /// URL of the effective source, if any.
    #[must_use]
    pub fn effective_url(&self) -> Option<&str> {
        self.upload
            .as_ref()
            .map(|upload| upload.url.as_str())
            .or(self.external.as_deref())
    }

    /// The effective source, resolved to a local file when the host can.
    #[must_use]
    pub fn media_source(&self, host: &dyn MediaHost) -> Option<MediaSource> {
        self.effective_url()
            .map(|url| MediaSource::new(url, host.resolve(url)))
    }

    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        self.external.as_deref()
    }

    #[must_use]
    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.upload.as_ref().map(|upload| &upload.file)
    }

    #[must_use]
    pub fn object_url(&self) -> Option<&ObjectUrl> {
        self.upload.as_ref().map(|upload| &upload.url)
    }

    /// Sets the external URL; blank input clears it.
    ///
    /// Returns true when the effective source changed.
    pub fn set_external(&mut self, url: &str) -> bool {
        let url = url.trim();
        let next = (!url.is_empty()).then(|| url.to_string());
        if next == self.external {
            return false;
        }
        self.external = next;
        self.upload.is_none()
    }

    /// Adopts a new uploaded file: allocates its object URL, then releases
    /// the previous one.
    pub fn replace_upload(&mut self, file: UploadedFile, host: &mut dyn MediaHost) {
        let url = host.create_object_url(&file);
        if let Some(previous) = self.upload.replace(Upload { url, file }) {
            host.revoke_object_url(&previous.url);
        }
    }

    /// Releases the uploaded file's object URL, if any.
    pub fn release_upload(&mut self, host: &mut dyn MediaHost) -> Option<UploadedFile> {
        let upload = self.upload.take()?;
        host.revoke_object_url(&upload.url);
        Some(upload.file)
    }

    pub fn clear_external(&mut self) {
        self.external = None;
    }
}
