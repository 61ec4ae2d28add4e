use std::io::Write;
use std::path::{Path, PathBuf};

use bpk1_rs::{bpk1_extractor::Bpk1Extractor, error::Bpk1Error};
use tracing::{debug, warn};

/// Runs every input in order. Bad headers are reported by the extractor and skipped; the first
/// other error stops the batch and is returned.
pub fn run<W: Write>(
    extractor: &Bpk1Extractor,
    files: &[PathBuf],
    list: bool,
    out: &mut W,
) -> Result<(), Bpk1Error> {
    for file in files {
        if list {
            list_blocks(extractor, file, out)?;
        } else {
            let written = extractor.extract(file)?;
            debug!("{}: {} files written", file.display(), written.len());
        }
    }
    Ok(())
}

/// Prints the block table of one container.
fn list_blocks<W: Write>(
    extractor: &Bpk1Extractor,
    file: &Path,
    out: &mut W,
) -> Result<(), Bpk1Error> {
    let blocks = match extractor.list(file) {
        Ok(blocks) => blocks,
        Err(err) if err.is_recoverable() => {
            warn!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    writeln!(out, "{}: {} blocks", file.display(), blocks.len())?;
    for block in blocks {
        writeln!(
            out,
            "  {:<8} offset {:#010X}  size {:>10}  checksum {:#010X}",
            block.name, block.offset, block.size, block.checksum
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn container(name: &[u8; 8], data: &[u8]) -> Vec<u8> {
        let mut out = b"BPK1".to_vec();
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&[0u8; 56]);
        out.extend_from_slice(&(0x40u32 + 20).to_le_bytes());
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(&0xABCDu32.to_le_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn bad_header_continues_and_fatal_error_stops() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.bpk");
        let good = dir.path().join("good.bpk");
        let taken = dir.path().join("taken.bpk");
        let after = dir.path().join("after.bpk");
        fs::write(&bad, b"not a container").unwrap();
        fs::write(&good, container(b"THUMB2\0\0", b"thumb")).unwrap();
        fs::write(&taken, container(b"THUMB2\0\0", b"thumb")).unwrap();
        fs::write(&after, container(b"THUMB2\0\0", b"thumb")).unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();

        let files = [bad, good, taken, after];
        let err = run(&Bpk1Extractor::default(), &files, false, &mut Vec::new()).unwrap_err();

        assert!(matches!(err, Bpk1Error::DestinationExists(_)));
        assert!(!dir.path().join("bad").exists());
        assert_eq!(
            fs::read(dir.path().join("good").join("THUMB2$0.bin")).unwrap(),
            b"thumb"
        );
        assert!(!dir.path().join("after").exists());
    }

    #[test]
    fn missing_file_stops_the_batch() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.bpk");
        fs::write(&good, container(b"A\0\0\0\0\0\0\0", b"a")).unwrap();

        let files = [dir.path().join("missing.bpk"), good];
        let err = run(&Bpk1Extractor::default(), &files, false, &mut Vec::new()).unwrap_err();

        assert!(matches!(err, Bpk1Error::Io(_)));
        assert!(!dir.path().join("good").exists());
    }

    #[test]
    fn list_prints_tables_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.bpk");
        let letter = dir.path().join("letter.bpk");
        fs::write(&bad, b"nope").unwrap();
        fs::write(&letter, container(b"MIISTD1\0", b"mii")).unwrap();

        let mut out = Vec::new();
        run(&Bpk1Extractor::default(), &[bad, letter], true, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("letter.bpk: 1 blocks"));
        assert!(text.contains("MIISTD1"));
        assert!(text.contains("checksum 0x0000ABCD"));
        assert!(!text.contains("bad.bpk"));
        assert!(!dir.path().join("letter").exists());
    }
}
