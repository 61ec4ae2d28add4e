use crate::{
    block_table::block_descriptor::BlockDescriptor,
    bpk1_header::Bpk1Header,
    error::Bpk1Error,
    ext::io_ext::{ReadExt, SeekExt},
};
use std::io::{Read, Seek, SeekFrom, Write};

/// Streaming reader over a BPK1 container.
///
/// The reader walks the descriptor table one entry at a time; block data is fetched by seeking
/// to the descriptor's offset and back, so the table cursor is never lost and the table is never
/// held in memory.
///
/// ```rust
/// use bpk1_rs::bpk1_reader::Bpk1Reader;
/// use std::io::Cursor;
///
/// # fn main() -> Result<(), bpk1_rs::error::Bpk1Error> {
/// # let bytes = {
/// #     let mut b = b"BPK1".to_vec();
/// #     b.extend_from_slice(&[0u8; 60]);
/// #     b
/// # };
/// let mut reader = Bpk1Reader::new(Cursor::new(bytes))?;
/// for _ in 0..reader.block_count() {
///     let descriptor = reader.read_descriptor()?;
///     let data = reader.read_block(&descriptor)?;
///     println!("{}: {} bytes", descriptor.name, data.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bpk1Reader<R: Read + Seek> {
    reader: R,
    header: Bpk1Header,
    remaining: u32,
}

impl<R: Read + Seek> Bpk1Reader<R> {
    /// Validates the signature and reads the header, leaving the reader at the first descriptor.
    ///
    /// Returns [`Bpk1Error::BadHeader`] if the stream does not start with `BPK1`.
    pub fn new(mut reader: R) -> Result<Self, Bpk1Error> {
        if !Bpk1Header::read_magic(&mut reader)? {
            return Err(Bpk1Error::BadHeader("<stream>".to_string()));
        }
        Self::after_magic(reader)
    }

    /// Continues from a reader whose signature has already been checked.
    pub(crate) fn after_magic(mut reader: R) -> Result<Self, Bpk1Error> {
        let header = Bpk1Header::read_after_magic(&mut reader)?;
        Ok(Self {
            reader,
            header,
            remaining: header.block_count,
        })
    }

    /// The container header, as read by [`Bpk1Reader::new`].
    pub fn header(&self) -> &Bpk1Header {
        &self.header
    }

    /// Number of descriptors in the block table.
    pub fn block_count(&self) -> u32 {
        self.header.block_count
    }

    /// Reads the next descriptor from the table.
    pub fn read_descriptor(&mut self) -> Result<BlockDescriptor, Bpk1Error> {
        let descriptor = BlockDescriptor::read(&mut self.reader)?;
        self.remaining = self.remaining.saturating_sub(1);
        Ok(descriptor)
    }

    /// Returns an iterator over the descriptors not read yet.
    pub fn descriptors(&mut self) -> Descriptors<'_, R> {
        Descriptors { reader: self }
    }

    /// Copies a block's bytes into `writer` and returns how many were copied.
    ///
    /// A block reaching past the end of the container is copied short; that is not an error.
    pub fn copy_block<W: Write + ?Sized>(
        &mut self,
        descriptor: &BlockDescriptor,
        writer: &mut W,
    ) -> Result<u64, Bpk1Error> {
        let copied = self.reader.restoring_position(|reader| {
            reader.seek(SeekFrom::Start(descriptor.offset as u64))?;
            reader.copy_up_to(descriptor.size as u64, writer)
        })?;
        Ok(copied)
    }

    /// Reads a block's bytes into memory. Short at the end of the container, like
    /// [`Bpk1Reader::copy_block`].
    pub fn read_block(&mut self, descriptor: &BlockDescriptor) -> Result<Vec<u8>, Bpk1Error> {
        let data = self.reader.restoring_position(|reader| {
            reader.seek(SeekFrom::Start(descriptor.offset as u64))?;
            reader.read_up_to(descriptor.size as u64)
        })?;
        Ok(data)
    }
}

/// Iterator over the remaining descriptors of a [`Bpk1Reader`].
pub struct Descriptors<'a, R: Read + Seek> {
    reader: &'a mut Bpk1Reader<R>,
}

impl<R: Read + Seek> Iterator for Descriptors<'_, R> {
    type Item = Result<BlockDescriptor, Bpk1Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.remaining == 0 {
            return None;
        }
        match self.reader.read_descriptor() {
            Ok(descriptor) => Some(Ok(descriptor)),
            Err(err) => {
                // Stop after the first failure; the table cursor is no longer meaningful.
                self.reader.remaining = 0;
                Some(Err(err))
            }
        }
    }
}
