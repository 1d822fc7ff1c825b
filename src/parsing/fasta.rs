//! FASTA loader using noodles.
//!
//! Loads every record of a FASTA file into a [`SequenceSet`]. Gzip input is
//! recognized by its magic bytes or a `.gz`/`.bgz` extension and decompressed
//! up front; concatenated (multi-member) gzip streams are read as one stream.
//!
//! Record headers keep the full definition line (name and description).
//! Line terminators, including `\r`, are dropped from sequence bodies.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::info;

use crate::core::sequence::SequenceSet;

/// First two bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA: {0}")]
    Noodles(String),

    #[error("Corrupt compressed stream: {0}")]
    Decompression(String),
}

/// Check if the path has a gzip extension
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("gz" | "bgz")
    )
}

fn has_gzip_magic<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    Ok(reader.fill_buf()?.starts_with(&GZIP_MAGIC))
}

/// Load all sequences from a plain or gzip-compressed FASTA file.
///
/// The whole file is read before returning; on failure no partial set is
/// produced. An empty file yields an empty set.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read,
/// `ParseError::Decompression` if a gzip stream is corrupt, or
/// `ParseError::Noodles` if a record is malformed.
pub fn load_fasta(path: &Path) -> Result<SequenceSet, ParseError> {
    let mut reader = BufReader::new(File::open(path)?);

    let sequences = if has_gzip_magic(&mut reader)? || is_gzipped(path) {
        let mut data = Vec::new();
        MultiGzDecoder::new(reader)
            .read_to_end(&mut data)
            .map_err(|e| ParseError::Decompression(format!("{}: {e}", path.display())))?;
        read_fasta(data.as_slice())?
    } else {
        read_fasta(reader)?
    };

    info!(
        path = %path.display(),
        sequences = sequences.len(),
        bases = sequences.total_bases(),
        "Loaded FASTA"
    );
    Ok(sequences)
}

/// Read all FASTA records from an uncompressed stream
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record cannot be parsed.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<SequenceSet, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut sequences = SequenceSet::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let mut header = String::from_utf8_lossy(record.name()).into_owned();
        if let Some(description) = record.description() {
            header.push(' ');
            header.push_str(&String::from_utf8_lossy(description));
        }
        let header = header.trim_end_matches(['\r', '\n']).to_string();

        sequences.push(header, record.sequence().as_ref());
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    fn gzip(content: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("phages.fa.gz")));
        assert!(is_gzipped(Path::new("/data/HOSTS.FNA.GZ")));
        assert!(is_gzipped(Path::new("hosts.fna.bgz")));
        assert!(!is_gzipped(Path::new("phages.fa")));
        assert!(!is_gzipped(Path::new("phages")));
    }

    #[test]
    fn test_load_plain_fasta() {
        let temp = write_temp(".fa", b">phi1 Escherichia phage\nACGTACGT\nACGT\n>phi2\nGGGG\n");

        let sequences = load_fasta(temp.path()).unwrap();
        assert_eq!(sequences.len(), 2);

        let first = sequences.get(0).unwrap();
        assert_eq!(first.header, "phi1 Escherichia phage");
        assert_eq!(first.bases, b"ACGTACGTACGT");

        let second = sequences.get(1).unwrap();
        assert_eq!(second.header, "phi2");
        assert_eq!(second.bases, b"GGGG");
    }

    #[test]
    fn test_load_crlf_fasta() {
        let temp = write_temp(".fa", b">chr1 desc\r\nACGT\r\nNNac\r\n>chr2\r\nTT\r\n");

        let sequences = load_fasta(temp.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences.header(0), "chr1 desc");
        assert_eq!(sequences.get(0).unwrap().bases, b"ACGTNNac");
        assert_eq!(sequences.header(1), "chr2");
        assert_eq!(sequences.get(1).unwrap().bases, b"TT");
    }

    #[test]
    fn test_load_gzipped_fasta() {
        let temp = write_temp(".fa.gz", &gzip(b">host\nACGTTGCA\n"));

        let sequences = load_fasta(temp.path()).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences.get(0).unwrap().bases, b"ACGTTGCA");
    }

    #[test]
    fn test_load_multi_member_gzip() {
        let mut content = gzip(b">a\nACGT\n");
        content.extend(gzip(b">b\nTTTT\nCC\n"));
        let temp = write_temp(".fa.gz", &content);

        let sequences = load_fasta(temp.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences.header(1), "b");
        assert_eq!(sequences.get(1).unwrap().bases, b"TTTTCC");
    }

    #[test]
    fn test_gzip_detected_without_extension() {
        let temp = write_temp(".fa", &gzip(b">x\nAC\n"));

        let sequences = load_fasta(temp.path()).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences.header(0), "x");
    }

    #[test]
    fn test_corrupt_gzip() {
        // valid gzip header followed by a deflate block with a reserved type
        let mut content = vec![0x1f, 0x8b, 0x08, 0, 0, 0, 0, 0, 0, 0xff];
        content.extend([0xff; 16]);
        let temp = write_temp(".fa.gz", &content);

        let result = load_fasta(temp.path());
        assert!(matches!(result, Err(ParseError::Decompression(_))));
    }

    #[test]
    fn test_empty_file() {
        let temp = write_temp(".fa", b"");
        let sequences = load_fasta(temp.path()).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = load_fasta(Path::new("/nonexistent/phages.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_read_fasta_from_slice() {
        let sequences = read_fasta(&b">s1\nac\ngt\n"[..]).unwrap();
        assert_eq!(sequences.get(0).unwrap().bases, b"acgt");
    }
}
