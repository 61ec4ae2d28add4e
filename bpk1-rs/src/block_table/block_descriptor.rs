use crate::error::Bpk1Error;
use crate::ext::io_ext::ReadExt;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Length of the raw, NUL-padded name field.
pub const NAME_LENGTH: usize = 8;

/// Represents an entry in the BPK1 block table.
/// Each entry describes a named byte range of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// Absolute offset of the block's data in the container.
    pub offset: u32,
    /// Length of the block's data in bytes.
    pub size: u32,
    /// Checksum stored alongside the block. Never verified.
    pub checksum: u32,
    /// Block name with trailing NUL padding removed.
    pub name: String,
}

impl BlockDescriptor {
    /// Size of one descriptor in the table.
    pub const SIZE: u64 = 4 + 4 + 4 + NAME_LENGTH as u64;

    /// Reads the next descriptor from the table.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, Bpk1Error> {
        let offset = reader.read_u32::<LittleEndian>()?;
        let size = reader.read_u32::<LittleEndian>()?;
        let checksum = reader.read_u32::<LittleEndian>()?;
        let name = decode_name(&reader.read_fixed::<NAME_LENGTH>()?)?;

        Ok(Self {
            offset,
            size,
            checksum,
            name,
        })
    }

    /// File name the block is extracted to, given how many blocks with the same name came
    /// before it.
    pub fn file_name(&self, occurrence: u32) -> String {
        format!("{}${occurrence}.bin", self.name)
    }
}

/// Decodes a raw name field. Only trailing NULs are stripped; the name must be UTF-8 and must
/// not contain a path separator.
pub(crate) fn decode_name(raw: &[u8]) -> Result<String, Bpk1Error> {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let name = std::str::from_utf8(&raw[..end])
        .map_err(|_| Bpk1Error::InvalidData(format!("Block name is not UTF-8: {raw:02X?}")))?;

    if name.contains(['/', '\\']) {
        return Err(Bpk1Error::InvalidData(format!(
            "Block name contains a path separator: {name:?}"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decode_name_strips_trailing_nuls_only() {
        assert_eq!(decode_name(b"THUMB2\0\0").unwrap(), "THUMB2");
        assert_eq!(decode_name(b"AB\0C\0\0\0\0").unwrap(), "AB\0C");
        assert_eq!(decode_name(b"MIISTD1\0").unwrap(), "MIISTD1");
        assert_eq!(decode_name(b"FULLNAME").unwrap(), "FULLNAME");
        assert_eq!(decode_name(&[0; 8]).unwrap(), "");
    }

    #[test]
    fn decode_name_rejects_separators_and_bad_utf8() {
        assert!(matches!(
            decode_name(b"../x\0\0\0\0"),
            Err(Bpk1Error::InvalidData(_))
        ));
        assert!(matches!(
            decode_name(&[0xFF, 0xFE, 0, 0, 0, 0, 0, 0]),
            Err(Bpk1Error::InvalidData(_))
        ));
    }

    #[test]
    fn reads_twenty_byte_descriptor() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x40u32.to_le_bytes());
        data.extend_from_slice(&0x10u32.to_le_bytes());
        data.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());
        data.extend_from_slice(b"STATIN1\0");
        let mut cursor = Cursor::new(data);

        let descriptor = BlockDescriptor::read(&mut cursor).unwrap();
        assert_eq!(cursor.position(), BlockDescriptor::SIZE);
        assert_eq!(
            descriptor,
            BlockDescriptor {
                offset: 0x40,
                size: 0x10,
                checksum: 0xDEADBEEF,
                name: "STATIN1".to_string(),
            }
        );
        assert_eq!(descriptor.file_name(2), "STATIN1$2.bin");
    }
}
