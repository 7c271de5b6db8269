//! # Container Kinds

use std::{borrow::Cow, path::Path};

/// The container/compression format of a corpus file.
///
/// Selected once, from the file name alone; file contents are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ContainerKind {
    /// Plain UTF-8 text.
    #[strum(serialize = "plain")]
    Plain,

    /// Gzip-compressed UTF-8 text.
    #[strum(serialize = "gzip")]
    Gzip,

    /// Bzip2-compressed UTF-8 text.
    #[strum(serialize = "bzip2")]
    Bzip2,

    /// A gzip-compressed tar archive of UTF-8 text members.
    #[strum(serialize = "tar.gz")]
    TarGz,
}

impl ContainerKind {
    /// Infer the container kind from a file name.
    ///
    /// * a stem ending in `.tar` (`corpus.tar.gz`) => [`ContainerKind::TarGz`]
    /// * `.gz` => [`ContainerKind::Gzip`]
    /// * `.bz2` => [`ContainerKind::Bzip2`]
    /// * anything else => [`ContainerKind::Plain`]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name: Cow<str> = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        let (stem, suffix) = match name.rfind('.') {
            Some(idx) if idx > 0 => name.split_at(idx),
            _ => (&*name, ""),
        };

        if stem.ends_with(".tar") {
            return ContainerKind::TarGz;
        }

        match suffix {
            ".gz" => ContainerKind::Gzip,
            ".bz2" => ContainerKind::Bzip2,
            _ => ContainerKind::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ContainerKind::from_path("corpus.txt"), ContainerKind::Plain);
        assert_eq!(ContainerKind::from_path("corpus"), ContainerKind::Plain);
        assert_eq!(
            ContainerKind::from_path("/data/corpus.txt.gz"),
            ContainerKind::Gzip
        );
        assert_eq!(
            ContainerKind::from_path("/data/corpus.txt.bz2"),
            ContainerKind::Bzip2
        );
        assert_eq!(
            ContainerKind::from_path("/data/python-corpus.tar.gz"),
            ContainerKind::TarGz
        );
        // No `.tar` stem; read as plain text.
        assert_eq!(ContainerKind::from_path("code.tgz"), ContainerKind::Plain);
    }

    #[test]
    fn test_from_path_uses_final_component_only() {
        assert_eq!(
            ContainerKind::from_path("/data.tar/corpus.txt"),
            ContainerKind::Plain
        );
        // The `.tar` stem rule wins over the final suffix.
        assert_eq!(
            ContainerKind::from_path("corpus.tar.bz2"),
            ContainerKind::TarGz
        );
        // A bare `.tar` has no `.tar` stem.
        assert_eq!(ContainerKind::from_path("corpus.tar"), ContainerKind::Plain);
        assert_eq!(ContainerKind::from_path(".gz"), ContainerKind::Plain);
    }

    #[test]
    fn test_display() {
        assert_eq!(ContainerKind::Plain.to_string(), "plain");
        assert_eq!(ContainerKind::TarGz.to_string(), "tar.gz");
    }
}
