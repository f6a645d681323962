// SPDX-License-Identifier: MPL-2.0
//! Extension based media type detection.

use std::path::Path;

/// Fallback type for unrecognized extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Video extensions offered by the file picker.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi", "ogv"];

/// Returns the MIME type for a file extension (without the dot).
#[must_use]
pub fn from_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "ogv" => "video/ogg",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => OCTET_STREAM,
    }
}

/// Returns the MIME type for a path, based on its extension.
#[must_use]
pub fn from_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(OCTET_STREAM, from_extension)
}

/// True for any `video/*` type.
#[must_use]
pub fn is_video(mime: &str) -> bool {
    mime.starts_with("video/")
}
