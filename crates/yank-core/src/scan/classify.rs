//! Filename conventions shared with the fetch tool.

/// Suffixes of transfers that have not finished (yt-dlp partials, aria2 control files).
pub const IN_PROGRESS_SUFFIXES: &[&str] = &[".part", ".aria2"];

/// True unless the name carries an in-progress suffix. Size and content are not inspected.
pub fn is_complete(file_name: &str) -> bool {
    !IN_PROGRESS_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// Removes every trailing `.ext` until none is left.
///
/// A leading dot does not start an extension, so `.hidden` stays as is.
/// Dots inside a title are lost too: `Mr. Robot.mp4` becomes `Mr`.
pub fn strip_all_extensions(file_name: &str) -> &str {
    let mut base = file_name;
    while let Some(idx) = base.rfind('.') {
        if idx == 0 {
            break;
        }
        base = &base[..idx];
    }
    base
}
