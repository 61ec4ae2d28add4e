//! LZ10 decompression for BPK1 files that Swapdoodle stores compressed.

use crate::error::Bpk1Error;
use std::io::{self, Cursor, Read, Seek};

/// Type byte that starts every LZ10 stream.
pub const LZ10_TYPE: u8 = 0x10;

/// Decompresses an LZ10 stream starting at the reader's current position.
pub fn decompress<R: Read + Seek>(reader: &mut R) -> Result<Vec<u8>, Bpk1Error> {
    rust_lzss::decompress(reader).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
            Bpk1Error::InvalidData(format!("LZ10 stream: {err}"))
        }
        _ => Bpk1Error::Io(err),
    })
}

pub fn decompress_from_slice(slice: &[u8]) -> Result<Vec<u8>, Bpk1Error> {
    decompress(&mut Cursor::new(slice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress() {
        assert_eq!(
            decompress_from_slice(&[
                0x10, 0x14, 0x00, 0x00, 0x08, 0x61, 0x62, 0x63, 0x64, 0xD0, 0x03,
            ])
            .unwrap(),
            b"abcdabcdabcdabcdabcd"
        );
    }

    #[test]
    fn literals_only() {
        assert_eq!(
            decompress_from_slice(&[LZ10_TYPE, 0x03, 0x00, 0x00, 0x00, b'x', b'y', b'z'])
                .unwrap(),
            b"xyz"
        );
    }

    #[test]
    fn rejects_uncompressed_data() {
        assert!(decompress_from_slice(b"BPK1").is_err());
    }
}
