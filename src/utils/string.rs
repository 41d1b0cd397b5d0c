//! String utility functions

/// Capitalize the first letter of a string
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Strip the trailing extension (last `.` plus a non-empty suffix) from a file name.
///
/// Only a non-empty suffix counts as an extension, so `"clip."` is returned
/// unchanged while `".env"` becomes the empty string.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index + 1 < name.len() => &name[..index],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("sunset"), "Sunset");
        assert_eq!(capitalize_first_letter("Sunset"), "Sunset");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("ärger"), "Ärger");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("sunset.jpg"), "sunset");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("clip."), "clip.");
        assert_eq!(strip_extension(".env"), "");
    }
}
