use crate::error::{Error, Result};
use crate::selector::{self, Algorithm, CompressionType};
use crate::{huffman, lzw};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of one [`compress`] or [`decompress`] call.
///
/// Failures are reported here rather than returned, so a caller can always
/// turn the record into its own success signal.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub success: bool,
    /// Size of the uncompressed data: the input when compressing, the
    /// restored output when decompressing.
    pub original_size: u64,
    /// Size of the container.
    pub compressed_size: u64,
    /// Space saved, as a percentage of `original_size`.
    pub compression_ratio: f64,
    pub algorithm: String,
    pub error: Option<String>,
}

impl CompressionResult {
    fn completed(algorithm: Algorithm, original_size: u64, compressed_size: u64) -> Self {
        Self {
            success: true,
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            algorithm: algorithm.name().to_string(),
            error: None,
        }
    }

    fn failed(algorithm: Option<Algorithm>, error: &Error) -> Self {
        Self {
            success: false,
            original_size: 0,
            compressed_size: 0,
            compression_ratio: 0.0,
            algorithm: algorithm.map(Algorithm::name).unwrap_or_default().to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// `(1 - compressed / original) * 100`, or 0 for an empty original.
///
/// Negative when the container is larger than the data it holds.
pub fn compression_ratio(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        0.0
    } else {
        (1.0 - compressed as f64 / original as f64) * 100.0
    }
}

/// Path the container for `output` is written to: `output` plus the
/// algorithm's suffix, so `out` becomes `out.huf` or `out.lzw`.
pub fn compressed_path(output: impl AsRef<Path>, algorithm: Algorithm) -> PathBuf {
    let mut path = OsString::from(output.as_ref().as_os_str());
    path.push(".");
    path.push(algorithm.extension());
    PathBuf::from(path)
}

/// Compresses `input` into [`compressed_path`]`(output, algorithm)`.
///
/// `Auto` is resolved from the input file name.
pub fn compress(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    kind: CompressionType,
) -> CompressionResult {
    let input = input.as_ref();
    let algorithm = kind.resolve(input);
    debug!(
        "compress {}: {:?} resolved to {}",
        input.display(),
        kind,
        algorithm
    );

    match try_compress(input, output.as_ref(), algorithm) {
        Ok(result) => {
            info!(
                "compressed {} with {}: {} -> {} bytes ({:.2}%)",
                input.display(),
                algorithm,
                result.original_size,
                result.compressed_size,
                result.compression_ratio
            );
            result
        }
        Err(err) => {
            warn!("compress {} failed: {}", input.display(), err);
            CompressionResult::failed(Some(algorithm), &err)
        }
    }
}

fn try_compress(input: &Path, output: &Path, algorithm: Algorithm) -> Result<CompressionResult> {
    let data = read_input(input)?;
    let container = match algorithm {
        Algorithm::Huffman => huffman::encode(&data)?,
        Algorithm::Lzw => lzw::encode(&data)?,
    };
    write_output(&compressed_path(output, algorithm), &container)?;

    Ok(CompressionResult::completed(
        algorithm,
        data.len() as u64,
        container.len() as u64,
    ))
}

/// Restores the file compressed in `input` to `output`.
///
/// The container type comes from the suffix of `input`: `.huf` or `.lzw`.
pub fn decompress(input: impl AsRef<Path>, output: impl AsRef<Path>) -> CompressionResult {
    let input = input.as_ref();
    let algorithm = selector::suffix(input).and_then(Algorithm::from_extension);

    let outcome = match algorithm {
        Some(algorithm) => try_decompress(input, output.as_ref(), algorithm),
        None => Err(Error::UnknownFormat(input.display().to_string())),
    };

    match outcome {
        Ok(result) => {
            info!(
                "decompressed {} with {}: {} -> {} bytes",
                input.display(),
                result.algorithm,
                result.compressed_size,
                result.original_size
            );
            result
        }
        Err(err) => {
            warn!("decompress {} failed: {}", input.display(), err);
            CompressionResult::failed(algorithm, &err)
        }
    }
}

fn try_decompress(input: &Path, output: &Path, algorithm: Algorithm) -> Result<CompressionResult> {
    let container = read_input(input)?;
    let data = match algorithm {
        Algorithm::Huffman => huffman::decode(&container)?,
        Algorithm::Lzw => lzw::decode(&container)?,
    };
    write_output(output, &data)?;

    Ok(CompressionResult::completed(
        algorithm,
        data.len() as u64,
        container.len() as u64,
    ))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::Input(format!("{} not found", path.display())),
        _ => Error::Input(format!("could not read {}: {err}", path.display())),
    })?;
    if data.is_empty() {
        return Err(Error::Input(format!("{} is empty", path.display())));
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
