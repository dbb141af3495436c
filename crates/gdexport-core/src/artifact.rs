//! Archive naming for exported presets.

use sanitize_filename::Options;

/// Extension appended to every archive name.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Stem used when nothing of the preset name survives sanitizing.
pub const FALLBACK_STEM: &str = "export";

/// Longest file name (in bytes) accepted by common file systems.
const MAX_FILE_NAME_BYTES: usize = 255;

/// Sanitize a free-form preset name into a file name stem.
///
/// Windows rules are always applied, since the archive may be unpacked on
/// any runner: path separators, reserved characters, control characters,
/// reserved device names and trailing dots or spaces are removed.
pub fn sanitize_name(name: &str) -> String {
    sanitize_filename::sanitize_with_options(
        name,
        Options {
            windows: true,
            truncate: true,
            replacement: "",
        },
    )
}

/// Derive the archive file name for a preset: `<sanitized name>.zip`.
///
/// The result is always a valid, non-empty file name no longer than
/// 255 bytes.
pub fn archive_name(name: &str) -> String {
    let mut stem = sanitize_name(name);
    // Trimming trailing dots or spaces can expose a reserved device name
    // (`"nul "` -> `"nul"`), so sanitize until nothing changes.
    loop {
        let next = sanitize_name(&stem);
        if next == stem {
            break;
        }
        stem = next;
    }
    truncate_to_boundary(&mut stem, MAX_FILE_NAME_BYTES - ARCHIVE_EXTENSION.len() - 1);
    if stem.is_empty() {
        stem.push_str(FALLBACK_STEM);
    }
    format!("{stem}.{ARCHIVE_EXTENSION}")
}

fn truncate_to_boundary(s: &mut String, max_bytes: usize) {
    if s.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
