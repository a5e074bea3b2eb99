//! In-place replacement of a selection inside a larger document.

use crate::error::{Error, Result};

/// Replace the first occurrence of `selection` in `whole` with `replacement`.
///
/// All text outside the replaced span is returned byte-identical. Fails with
/// [`Error::InvalidInput`] when `selection` is empty or whitespace-only, and
/// with [`Error::NotFound`] when `selection` does not occur verbatim in
/// `whole`.
pub fn replace_first(whole: &str, selection: &str, replacement: &str) -> Result<String> {
    if selection.trim().is_empty() {
        return Err(Error::InvalidInput(
            "selected text must not be empty".to_string(),
        ));
    }

    if !whole.contains(selection) {
        return Err(Error::NotFound(
            "selected text not present in the lecture".to_string(),
        ));
    }

    Ok(whole.replacen(selection, replacement, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_first_occurrence_only() {
        let out = replace_first("one two one two", "two", "2").unwrap();
        assert_eq!(out, "one 2 one two");
    }

    #[test]
    fn test_surrounding_text_untouched() {
        let out = replace_first("Hello world, hello again", "world", "REPLACED").unwrap();
        assert_eq!(out, "Hello REPLACED, hello again");
    }

    #[test]
    fn test_replacement_may_be_empty() {
        let out = replace_first("keep drop keep", " drop", "").unwrap();
        assert_eq!(out, "keep keep");
    }

    #[test]
    fn test_selection_not_found() {
        let err = replace_first("abc", "xyz", "r").unwrap_err();
        match err {
            Error::NotFound(_) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = replace_first("abc", "", "r").unwrap_err();
        match err {
            Error::InvalidInput(_) => {}
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_selection_rejected() {
        let err = replace_first("a b c", "  ", "r").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_multibyte_text() {
        let out = replace_first("la théorie de la définition", "définition", "preuve").unwrap();
        assert_eq!(out, "la théorie de la preuve");
    }

    #[test]
    fn test_selection_equal_to_whole() {
        let out = replace_first("all of it", "all of it", "new").unwrap();
        assert_eq!(out, "new");
    }
}
