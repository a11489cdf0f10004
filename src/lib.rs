//! # huffzw - single-file Huffman and LZW compression
//!
//! Compresses one whole file with either Huffman coding or LZW, picking the
//! algorithm from the file name unless the caller names one.
//!
//! - **Huffman**: byte frequencies build a prefix-code tree; codes are packed
//!   MSB first behind the frequency table and the exact bit length.
//! - **LZW**: an adaptive dictionary seeded with the 256 byte literals and
//!   capped at 4096 entries; the container is a list of codes.
//!
//! Text suffixes (`txt`, `csv`, `json`, ...) select Huffman, everything else
//! selects LZW. Decompression dispatches on the `.huf` / `.lzw` suffix.
//!
//! ## Example
//!
//! ```
//! let text = b"abracadabra abracadabra";
//!
//! let packed = huffzw::huffman::encode(text)?;
//! assert_eq!(huffzw::huffman::decode(&packed)?, text);
//!
//! let packed = huffzw::lzw::encode(text)?;
//! assert_eq!(huffzw::lzw::decode(&packed)?, text);
//! # Ok::<(), huffzw::Error>(())
//! ```
//!
//! File-level calls never fail outright; they return a [`CompressionResult`]:
//!
//! ```no_run
//! use huffzw::{compress, CompressionType};
//!
//! let result = compress("notes.txt", "notes", CompressionType::Auto);
//! if result.success {
//!     println!("{} saved {:.2}%", result.algorithm, result.compression_ratio);
//! }
//! ```

mod compressor;
mod error;
mod frequency;
pub mod huffman;
mod huffman_tree;
pub mod lzw;
mod lzw_dictionary;
mod prefix_code;
mod selector;
mod wire;


pub use compressor::{compress, compressed_path, compression_ratio, decompress, CompressionResult};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman_tree::{HuffmanNode, HuffmanTree, NodeKey};
pub use lzw_dictionary::{LzwDictionary, LZW_LITERALS, LZW_MAX_ENTRIES};
pub use prefix_code::{PrefixCode, PrefixCodeTable};
pub use selector::{
    select, Algorithm, CompressionType, HUFFMAN_EXTENSION, LZW_EXTENSION, TEXT_EXTENSIONS,
};
