use crate::ext::io_ext::SeekExt;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek};

/// Magic signature every BPK1 container starts with.
pub const BPK1_MAGIC: [u8; 4] = *b"BPK1";

/// Size of the reserved region following the block count. Its fields are not decoded.
pub const RESERVED_SIZE: u64 = 0x4 + 0x4 + 0x4 + 0x2C;

/// Total size of the fixed header; the descriptor table starts right after it.
pub const HEADER_SIZE: u64 = 0x4 + 0x4 + RESERVED_SIZE;

/// The fixed-size header at the start of a BPK1 container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bpk1Header {
    /// Number of descriptors in the block table.
    pub block_count: u32,
}

impl Bpk1Header {
    /// Reads the 4-byte signature and reports whether it is `BPK1`.
    ///
    /// A stream shorter than the signature counts as a mismatch rather than an I/O error.
    pub fn read_magic<R: Read>(reader: &mut R) -> io::Result<bool> {
        let mut magic = Vec::with_capacity(BPK1_MAGIC.len());
        reader
            .by_ref()
            .take(BPK1_MAGIC.len() as u64)
            .read_to_end(&mut magic)?;
        Ok(magic == BPK1_MAGIC)
    }

    /// Reads the rest of the header after the signature, leaving the stream at the first
    /// descriptor.
    pub fn read_after_magic<R: Read + Seek>(reader: &mut R) -> io::Result<Self> {
        let block_count = reader.read_u32::<LittleEndian>()?;
        reader.skip(RESERVED_SIZE)?;
        Ok(Self { block_count })
    }

    /// Checks whether an in-memory buffer starts with the `BPK1` signature.
    pub fn has_magic(data: &[u8]) -> bool {
        data.get(0..BPK1_MAGIC.len())
            .is_some_and(|magic| magic == BPK1_MAGIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_is_0x40_bytes() {
        assert_eq!(HEADER_SIZE, 0x40);
    }

    #[test]
    fn short_magic_is_a_mismatch() {
        let mut cursor = Cursor::new(b"BP".to_vec());
        assert!(!Bpk1Header::read_magic(&mut cursor).unwrap());
    }

    #[test]
    fn reads_block_count_and_skips_reserved() {
        let mut data = b"BPK1".to_vec();
        data.extend_from_slice(&7u32.to_le_bytes());
        data.extend_from_slice(&[0xAA; RESERVED_SIZE as usize]);
        data.push(0x55);
        let mut cursor = Cursor::new(data);

        assert!(Bpk1Header::read_magic(&mut cursor).unwrap());
        let header = Bpk1Header::read_after_magic(&mut cursor).unwrap();
        assert_eq!(header.block_count, 7);
        assert_eq!(cursor.stream_position().unwrap(), HEADER_SIZE);
    }
}
