//! Benchmark-pair dataset loader.
//!
//! The file format is line oriented: repeating groups of three non-empty
//! lines, an integer identifier followed by the two sequences. Blank lines
//! are ignored everywhere. A file that ends mid-group is malformed; so is
//! a non-integer identifier line. Both are fatal at load time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected an integer identifier, found {found:?}")]
    BadIdentifier { line: usize, found: String },
    #[error("identifier {id} is missing its pair of sequences")]
    IncompleteGroup { id: u64 },
}

/// Sequence pairs keyed by identifier, ordered by identifier.
pub type Dataset = BTreeMap<u64, (String, String)>;

/// Load a dataset file from disk.
pub fn load_pairs(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    parse_pairs(&fs::read_to_string(path)?)
}

/// Parse dataset text.
pub fn parse_pairs(text: &str) -> Result<Dataset, DatasetError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut pairs = Dataset::new();
    for group in lines.chunks(3) {
        let (line, id_text) = group[0];
        let id = id_text
            .parse::<u64>()
            .map_err(|_| DatasetError::BadIdentifier {
                line,
                found: id_text.to_string(),
            })?;
        match group {
            [_, (_, first), (_, second)] => {
                pairs.insert(id, (first.to_string(), second.to_string()));
            }
            _ => return Err(DatasetError::IncompleteGroup { id }),
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_and_skips_blank_lines() {
        let text = "1\nAGTACGCA\nTATGC\n\n\n2\nCGAGACGT\nAGACTAGTTAC\n";
        let data = parse_pairs(text).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[&1], ("AGTACGCA".to_string(), "TATGC".to_string()));
        assert_eq!(
            data[&2],
            ("CGAGACGT".to_string(), "AGACTAGTTAC".to_string())
        );
    }

    #[test]
    fn empty_input_is_an_empty_dataset() {
        assert!(parse_pairs("").unwrap().is_empty());
        assert!(parse_pairs("\n\n").unwrap().is_empty());
    }

    #[test]
    fn incomplete_group_is_fatal() {
        let err = parse_pairs("1\nAGTACGCA\nTATGC\n2\nCGAGACGT\n").unwrap_err();
        assert!(matches!(err, DatasetError::IncompleteGroup { id: 2 }));
    }

    #[test]
    fn bad_identifier_reports_line() {
        let err = parse_pairs("\nfoo\nAGT\nTAT\n").unwrap_err();
        match err {
            DatasetError::BadIdentifier { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, "foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
