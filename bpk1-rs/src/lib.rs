//! # bpk1-rs
//!
//! `bpk1-rs` is a pure Rust extractor for BPK1 containers, the block archives Swapdoodle stores
//! letters, stationery and Mii data in.
//!
//! ## Features
//! - Validate and read the fixed BPK1 header and its block table
//! - Extract every block to `<name>$<occurrence>.bin`, disambiguating repeated names
//! - Recursively unpack blocks that are themselves containers
//! - Read LZ10-compressed containers
//!
//! Block checksums are read but never verified.
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! bpk1-rs = "0.1"
//! ```
//!
//! ### Example: Listing and Extracting Blocks
//! ```rust,no_run
//! use bpk1_rs::bpk1_extractor::Bpk1Extractor;
//! use bpk1_rs::extract_options::ExtractOptions;
//!
//! let extractor = Bpk1Extractor::new(ExtractOptions::default());
//!
//! // List all blocks
//! for block in extractor.list("letter.bpk").unwrap() {
//!     println!("Block: {} ({} bytes at {})", block.name, block.size, block.offset);
//! }
//!
//! // Extract them next to the container, into `letter/`
//! let written = extractor.unpack("letter.bpk").unwrap();
//! ```

pub mod block_table;
pub mod bpk1_extractor;
pub mod bpk1_header;
pub mod bpk1_reader;
pub mod error;
mod ext;
pub mod extract_options;
pub mod lzss;
