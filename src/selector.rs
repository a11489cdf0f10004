use crate::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Suffix appended to Huffman containers.
pub const HUFFMAN_EXTENSION: &str = "huf";

/// Suffix appended to LZW containers.
pub const LZW_EXTENSION: &str = "lzw";

/// Text-oriented suffixes that [`select`] routes to Huffman coding.
pub const TEXT_EXTENSIONS: [&str; 11] = [
    "txt", "csv", "json", "xml", "html", "css", "js", "py", "cpp", "h", "java",
];

/// A concrete compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Huffman,
    Lzw,
}

impl Algorithm {
    /// Human-readable name reported in results.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Huffman => "Huffman Coding",
            Algorithm::Lzw => "LZW Algorithm",
        }
    }

    /// Suffix, without the dot, of the container this algorithm writes.
    pub fn extension(self) -> &'static str {
        match self {
            Algorithm::Huffman => HUFFMAN_EXTENSION,
            Algorithm::Lzw => LZW_EXTENSION,
        }
    }

    /// Maps a container suffix back to its algorithm. Case-sensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            HUFFMAN_EXTENSION => Some(Algorithm::Huffman),
            LZW_EXTENSION => Some(Algorithm::Lzw),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionType {
    Huffman,
    Lzw,
    /// Pick from the input file name with [`select`].
    #[default]
    Auto,
}

impl CompressionType {
    /// Resolves `Auto` against the input path.
    pub fn resolve(self, input: &Path) -> Algorithm {
        match self {
            CompressionType::Huffman => Algorithm::Huffman,
            CompressionType::Lzw => Algorithm::Lzw,
            CompressionType::Auto => select(input),
        }
    }
}

impl FromStr for CompressionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huffman" => Ok(CompressionType::Huffman),
            "lzw" => Ok(CompressionType::Lzw),
            "auto" => Ok(CompressionType::Auto),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Text after the last `.` of the final path component, if any.
pub(crate) fn suffix(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, suffix)| suffix)
}

/// Picks an algorithm from the file name alone.
///
/// Known text suffixes get Huffman coding, everything else, including no
/// suffix at all, gets LZW. The file contents are never inspected.
pub fn select(path: impl AsRef<Path>) -> Algorithm {
    let is_text = suffix(path.as_ref())
        .map(str::to_ascii_lowercase)
        .is_some_and(|suffix| TEXT_EXTENSIONS.contains(&suffix.as_str()));

    if is_text {
        Algorithm::Huffman
    } else {
        Algorithm::Lzw
    }
}
