//! # Line Filters
//!
//! A [`LineFilter`] decides, per raw line, whether the line takes part in
//! counting and in the normalized corpus. Rejected lines still count toward
//! the pipeline's processed-line cap.
//!
//! Closures `Fn(&str) -> bool` are filters too.

mod encyclopedia;

#[doc(inline)]
pub use encyclopedia::{DOCUMENT_END_MARKER, EncyclopediaFilter, MIN_ENCYCLOPEDIA_TOKENS};

/// A predicate over raw lines.
pub trait LineFilter {
    /// Should this line be kept?
    fn accept(
        &self,
        line: &str,
    ) -> bool;
}

impl<F> LineFilter for F
where
    F: Fn(&str) -> bool,
{
    fn accept(
        &self,
        line: &str,
    ) -> bool {
        self(line)
    }
}

/// The absent filter; accepts every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl LineFilter for AcceptAll {
    fn accept(
        &self,
        _line: &str,
    ) -> bool {
        true
    }
}

/// Runtime selection over the builtin filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BuiltinFilter {
    /// See [`AcceptAll`].
    #[default]
    AcceptAll,

    /// See [`EncyclopediaFilter`].
    Encyclopedia(EncyclopediaFilter),
}

impl LineFilter for BuiltinFilter {
    fn accept(
        &self,
        line: &str,
    ) -> bool {
        match self {
            Self::AcceptAll => true,
            Self::Encyclopedia(f) => f.accept(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.accept(""));
        assert!(AcceptAll.accept("anything"));
        assert!(BuiltinFilter::default().accept(""));
    }

    #[test]
    fn test_closure_filter() {
        let no_comments = |line: &str| !line.trim_start().starts_with('#');
        assert!(no_comments.accept("x = 1"));
        assert!(!no_comments.accept("  # comment"));
    }

    #[test]
    fn test_builtin_encyclopedia() {
        let filter = BuiltinFilter::Encyclopedia(EncyclopediaFilter::default());
        assert!(!filter.accept("Title"));
        assert!(filter.accept("a line of body text"));
    }
}
