//! File intake: the HTML-file predicate and drop-payload parsing.
//!
//! Terminal emulators deliver a file drop as a bracketed paste of paths, one
//! per line, some as `file://` URIs with percent-escapes. The parser here
//! normalizes all of that into candidate paths; the predicate then decides
//! which candidates enter the read pipeline.

use std::path::{Path, PathBuf};

/// Declared MIME type for a path, sniffed from the extension. Returns an
/// empty string when the extension is unknown, mirroring how browsers hand
/// over an empty `type` for files they cannot classify.
pub fn declared_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("txt") => "text/plain",
        Some("css") => "text/css",
        Some("csv") => "text/csv",
        Some("md") => "text/markdown",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "",
    }
}

/// The acceptance predicate: declared type is HTML or empty AND the file name
/// ends in `.html`/`.htm` case-insensitively. Both conditions required.
pub fn is_html_candidate(name: &str, mime: &str) -> bool {
    let is_html_type = mime == "text/html" || mime.is_empty();
    let lower = name.to_ascii_lowercase();
    let has_html_extension = lower.ends_with(".html") || lower.ends_with(".htm");
    is_html_type && has_html_extension
}

/// Splits a submitted batch into (accepted, rejected-count). Acceptance looks
/// only at the name and sniffed type; existence and readability surface later
/// as read failures.
pub fn filter_batch(paths: Vec<PathBuf>) -> (Vec<PathBuf>, usize) {
    let total = paths.len();
    let accepted: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| {
            let Some(name) = file_name(path) else {
                return false;
            };
            is_html_candidate(name, declared_mime(path))
        })
        .collect();
    let rejected = total - accepted.len();
    (accepted, rejected)
}

pub fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Parses a bracketed-paste payload into candidate paths.
///
/// Handles one path per line, `file://` URIs (with the `localhost` authority
/// some emulators emit), percent-escapes, and surrounding single or double
/// quotes added by shells when a dropped path contains spaces.
pub fn parse_drop_payload(payload: &str) -> Vec<PathBuf> {
    payload
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(normalize_dropped_path)
        .collect()
}

fn normalize_dropped_path(line: &str) -> Option<PathBuf> {
    let line = line
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            line.strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })
        .unwrap_or(line);

    if let Some(rest) = line.strip_prefix("file://") {
        let rest = rest.strip_prefix("localhost").unwrap_or(rest);
        if !rest.starts_with('/') {
            return None;
        }
        return Some(PathBuf::from(percent_decode(rest)));
    }

    Some(PathBuf::from(line))
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
