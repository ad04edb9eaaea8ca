// src/io/fasta.rs
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::info;

/// Open a FASTA (or plain sequence) file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Collapse a FASTA stream into one uppercase sequence.
///
/// Header lines (`>`) are dropped and every other line is trimmed and
/// appended, so multi-record files are concatenated.
pub fn read_sequence_from<R: BufRead>(reader: R) -> io::Result<String> {
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            continue;
        }
        sequence.push_str(line.trim());
    }
    sequence.make_ascii_uppercase();
    Ok(sequence)
}

/// Load the sequence stored at `path`.
pub fn read_sequence(path: &str) -> io::Result<String> {
    let sequence = read_sequence_from(open_fasta(path)?)?;
    info!("Loaded sequence from {} ({} bp)", path, sequence.len());
    Ok(sequence)
}
