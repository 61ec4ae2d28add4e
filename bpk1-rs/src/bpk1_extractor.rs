use crate::{
    block_table::{block_descriptor::BlockDescriptor, block_names::BlockNames},
    bpk1_header::Bpk1Header,
    bpk1_reader::Bpk1Reader,
    error::Bpk1Error,
    extract_options::ExtractOptions,
    lzss,
};
use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Cursor, Read, Seek, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Any seekable byte source a container can be read from: the file itself, or its decompressed
/// contents held in memory.
trait ContainerSource: Read + Seek {}
impl<T: Read + Seek> ContainerSource for T {}

/// Extracts BPK1 containers into directories of block files.
///
/// Each container `some/dir/letter.bpk` is unpacked into a new directory `some/dir/letter`,
/// holding one `<name>$<occurrence>.bin` file per block in table order.
///
/// ```rust,no_run
/// use bpk1_rs::{bpk1_extractor::Bpk1Extractor, extract_options::ExtractOptions};
///
/// let extractor = Bpk1Extractor::new(ExtractOptions::new().recurse(true));
/// for path in extractor.extract("letter.bpk").unwrap() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bpk1Extractor {
    options: ExtractOptions,
}

impl Bpk1Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Unpacks `file`, recursively if the options ask for it.
    pub fn extract<P: AsRef<Path>>(&self, file: P) -> Result<Vec<PathBuf>, Bpk1Error> {
        if self.options.recurse {
            self.recurse_unpack(file)
        } else {
            self.unpack(file)
        }
    }

    /// Unpacks a single container and returns the block files written, in table order.
    ///
    /// A file without the `BPK1` signature is reported and yields no files; nothing is created
    /// for it. Every other failure is returned. The destination directory must not exist yet.
    pub fn unpack<P: AsRef<Path>>(&self, file: P) -> Result<Vec<PathBuf>, Bpk1Error> {
        let file = file.as_ref();
        let source = match self.open_container(file) {
            Ok(source) => source,
            Err(err) if err.is_recoverable() => {
                warn!("{err}");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        // The header is read in full first so a truncated one leaves nothing on disk.
        let mut reader = Bpk1Reader::after_magic(source)?;
        let destination = destination_for(file);
        create_destination(&destination)?;
        debug!("Created {}", destination.display());
        info!("Read {} blocks.", reader.block_count());

        let mut names = BlockNames::new();
        let mut out_files = Vec::new();
        for _ in 0..reader.block_count() {
            let descriptor = reader.read_descriptor()?;
            info!(
                "Block {}: offset {}, size {}, checksum {}",
                descriptor.name, descriptor.offset, descriptor.size, descriptor.checksum
            );

            let occurrence = names.next(&descriptor.name);
            let out_file = destination.join(descriptor.file_name(occurrence));
            write_block(&mut reader, &descriptor, &out_file)?;
            out_files.push(out_file);
        }
        Ok(out_files)
    }

    /// Unpacks `file`, then every block file it produced, and so on down.
    ///
    /// Returns all files written, each block file directly followed by whatever was unpacked
    /// from it. A branch ends at a block without the `BPK1` signature or with no blocks.
    pub fn recurse_unpack<P: AsRef<Path>>(&self, file: P) -> Result<Vec<PathBuf>, Bpk1Error> {
        let mut produced = Vec::new();
        for child in self.unpack(file)? {
            let nested = self.recurse_unpack(&child)?;
            produced.push(child);
            produced.extend(nested);
        }
        Ok(produced)
    }

    /// Reads the descriptor table of `file` without extracting anything.
    ///
    /// Unlike [`Bpk1Extractor::unpack`], a missing signature is returned as
    /// [`Bpk1Error::BadHeader`].
    pub fn list<P: AsRef<Path>>(&self, file: P) -> Result<Vec<BlockDescriptor>, Bpk1Error> {
        let source = self.open_container(file.as_ref())?;
        let mut reader = Bpk1Reader::after_magic(source)?;
        reader.descriptors().collect()
    }

    /// Opens `file` and checks its signature, decompressing it first if allowed and needed.
    /// On success the returned source is positioned just past the signature.
    fn open_container(&self, file: &Path) -> Result<Box<dyn ContainerSource>, Bpk1Error> {
        let mut reader = BufReader::new(File::open(file)?);
        if Bpk1Header::read_magic(&mut reader)? {
            return Ok(Box::new(reader));
        }

        if self.options.decompress {
            reader.rewind()?;
            match lzss::decompress(&mut reader) {
                Ok(data) if Bpk1Header::has_magic(&data) => {
                    debug!(
                        "Decompressed {} into {} bytes",
                        file.display(),
                        data.len()
                    );
                    let mut cursor = Cursor::new(data);
                    cursor.set_position(4);
                    return Ok(Box::new(cursor));
                }
                Ok(_) => debug!("{} decompressed, but not into a BPK1", file.display()),
                Err(err) => debug!("{} is not LZ10 compressed: {err}", file.display()),
            }
        }

        Err(Bpk1Error::BadHeader(file.display().to_string()))
    }
}

/// Directory a container is unpacked into: its own path without the extension.
pub fn destination_for(file: &Path) -> PathBuf {
    file.with_extension("")
}

fn create_destination(destination: &Path) -> Result<(), Bpk1Error> {
    fs::create_dir(destination).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => Bpk1Error::DestinationExists(destination.to_path_buf()),
        _ => Bpk1Error::Io(err),
    })
}

fn write_block<R: Read + Seek>(
    reader: &mut Bpk1Reader<R>,
    descriptor: &BlockDescriptor,
    out_file: &Path,
) -> Result<(), Bpk1Error> {
    let mut out = BufWriter::new(File::create(out_file)?);
    let copied = reader.copy_block(descriptor, &mut out)?;
    out.flush()?;

    if copied < descriptor.size as u64 {
        debug!(
            "Block {} ends past the container: wrote {copied} of {} bytes",
            descriptor.name, descriptor.size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_strips_last_extension_only() {
        assert_eq!(
            destination_for(Path::new("dir/letter.bpk")),
            PathBuf::from("dir/letter")
        );
        assert_eq!(
            destination_for(Path::new("dir/letter.tar.bpk")),
            PathBuf::from("dir/letter.tar")
        );
        assert_eq!(
            destination_for(Path::new("out/THUMB2$0.bin")),
            PathBuf::from("out/THUMB2$0")
        );
        assert_eq!(destination_for(Path::new("noext")), PathBuf::from("noext"));
    }
}
