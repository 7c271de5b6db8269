//! # Vocabulary File IO
//!
//! A vocabulary file holds one token per line, most frequent first,
//! with no trailing newline.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    LMResult,
    types::{CountType, StringChunkType},
    vocab::TopKVocab,
};

/// Save a [`TopKVocab`] to a vocabulary file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<K, C, P>(
    vocab: &TopKVocab<K, C>,
    path: P,
) -> LMResult<()>
where
    K: StringChunkType,
    C: CountType,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`TopKVocab`] to a [`Write`] writer.
pub fn write_vocab<K, C, W>(
    vocab: &TopKVocab<K, C>,
    writer: &mut W,
) -> LMResult<()>
where
    K: StringChunkType,
    C: CountType,
    W: Write,
{
    for (idx, token) in vocab.tokens().enumerate() {
        if idx > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(token.as_bytes())?;
    }
    Ok(())
}

/// Load the token list of a vocabulary file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> LMResult<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    read_vocab(reader)
}

/// Read the token list of a vocabulary [`BufRead`] stream.
pub fn read_vocab<R: BufRead>(reader: R) -> LMResult<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            tokens.push(line);
        }
    }
    Ok(tokens)
}
