/// Settings for a [`Bpk1Extractor`](crate::bpk1_extractor::Bpk1Extractor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Extract every produced block file again, unpacking nested containers.
    ///
    /// There is no cycle detection and no depth limit: a container holding a copy of itself
    /// recurses until the filesystem gives out.
    pub recurse: bool,
    /// Run files without the `BPK1` signature through the LZ10 decoder before giving up on them.
    pub decompress: bool,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn decompress(mut self, decompress: bool) -> Self {
        self.decompress = decompress;
        self
    }
}
