use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

pub trait ReadExt: Read {
    /// Reads exactly `N` bytes into a fixed-size array.
    fn read_fixed<const N: usize>(&mut self) -> io::Result<[u8; N]>;

    /// Reads up to `size` bytes, stopping early at EOF.
    fn read_up_to(&mut self, size: u64) -> io::Result<Vec<u8>>;

    /// Copies up to `size` bytes into `writer`, stopping early at EOF. Returns the number of
    /// bytes copied.
    fn copy_up_to<W: Write + ?Sized>(&mut self, size: u64, writer: &mut W) -> io::Result<u64>;
}

impl<T> ReadExt for T
where
    T: Read,
{
    fn read_fixed<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_up_to(&mut self, size: u64) -> io::Result<Vec<u8>> {
        let mut result = Vec::new();
        self.by_ref().take(size).read_to_end(&mut result)?;
        Ok(result)
    }

    fn copy_up_to<W: Write + ?Sized>(&mut self, size: u64, writer: &mut W) -> io::Result<u64> {
        io::copy(&mut self.by_ref().take(size), writer)
    }
}

/// Utility methods for working with seekable streams.
pub trait SeekExt: Seek {
    /// Skips over the given number of bytes from the current position.
    fn skip(&mut self, size: u64) -> io::Result<u64>;

    /// Runs `f` and then seeks back to the position the stream had before the call, whether or
    /// not `f` succeeded.
    fn restoring_position<F, R>(&mut self, f: F) -> io::Result<R>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> io::Result<R>;
}

impl<T> SeekExt for T
where
    T: Seek,
{
    fn skip(&mut self, size: u64) -> io::Result<u64> {
        let size = i64::try_from(size).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;

        self.seek(SeekFrom::Current(size))
    }

    fn restoring_position<F, R>(&mut self, f: F) -> io::Result<R>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> io::Result<R>,
    {
        let pos = self.stream_position()?;
        let result = f(self);
        self.seek(SeekFrom::Start(pos))?;
        result
    }
}
