//! Huffman container: frequency table, exact bit length, packed codes.
//!
//! ```text
//! u64 distinct byte count
//! { u8 byte, u32 frequency } * count    ascending byte order
//! u64 exact bit length
//! packed bits, MSB first, zero padded to a byte boundary
//! ```

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::huffman_tree::{HuffmanNode, HuffmanTree};
use crate::prefix_code::PrefixCodeTable;
use crate::wire::ByteReader;
use bitvec::prelude::*;
use log::debug;

const ENTRY_SIZE: usize = 5;

/// Compresses `data` into a Huffman container.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let table = FrequencyTable::analyze(data);
    let tree = HuffmanTree::build(&table)
        .ok_or_else(|| Error::Input("cannot Huffman-encode empty input".to_string()))?;
    let codes = PrefixCodeTable::from_tree(&tree);
    debug!(
        "huffman: {} distinct bytes over {} input bytes",
        table.distinct(),
        data.len()
    );

    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(data.len());
    for &byte in data {
        // Every input byte is in the table the codes were built from.
        if let Some(code) = codes.get(byte) {
            bits.extend_from_bitslice(code.as_bitslice());
        }
    }
    let bit_len = bits.len() as u64;
    bits.set_uninitialized(false);
    let packed = bits.into_vec();

    let mut out = Vec::with_capacity(16 + table.distinct() * ENTRY_SIZE + packed.len());
    out.extend_from_slice(&(table.distinct() as u64).to_le_bytes());
    for (byte, count) in table.iter() {
        let count = u32::try_from(count).map_err(|_| {
            Error::Input(format!(
                "byte {byte:#04x} occurs {count} times, more than a frequency field holds"
            ))
        })?;
        out.push(byte);
        out.extend_from_slice(&count.to_le_bytes());
    }
    out.extend_from_slice(&bit_len.to_le_bytes());
    out.extend_from_slice(&packed);

    Ok(out)
}

/// Restores the bytes stored in a Huffman container.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    let mut reader = ByteReader::new(container);

    let distinct = reader.read_u64("distinct byte count")?;
    if distinct == 0 || distinct > 256 {
        return Err(Error::format(format!(
            "frequency table claims {distinct} distinct bytes"
        )));
    }
    let mut entries = Vec::with_capacity(distinct as usize);
    for _ in 0..distinct {
        let byte = reader.read_u8("frequency table byte")?;
        let count = reader.read_u32("frequency table count")?;
        entries.push((byte, u64::from(count)));
    }
    let table = FrequencyTable::from_entries(entries)?;
    let tree = HuffmanTree::build(&table)
        .ok_or_else(|| Error::format("frequency table is empty"))?;

    let bit_len = reader.read_u64("bit length")?;
    let bit_len = usize::try_from(bit_len)
        .map_err(|_| Error::format(format!("bit length {bit_len} is out of range")))?;
    let byte_len = bit_len.div_ceil(8);
    let packed = reader.take(byte_len, "packed bits")?;
    if reader.remaining() != 0 {
        return Err(Error::format(format!(
            "{} trailing bytes after the packed bits",
            reader.remaining()
        )));
    }

    let expected = table.total();
    // Every symbol costs at least one bit.
    let mut out = Vec::with_capacity(usize::try_from(expected).map_or(bit_len, |n| n.min(bit_len)));
    let root = tree.root();
    let single_symbol = matches!(tree.node(root), HuffmanNode::Leaf { .. });
    let mut node = root;

    for bit in packed.view_bits::<Msb0>()[..bit_len].iter().by_vals() {
        if single_symbol {
            // The lone leaf's code is a single zero bit.
            if bit {
                return Err(Error::format("one bit in a single-symbol stream"));
            }
        } else if let Some(next) = tree.child(node, bit) {
            node = next;
        }

        if let HuffmanNode::Leaf { byte, .. } = *tree.node(node) {
            out.push(byte);
            node = root;
        }
    }

    if node != root {
        return Err(Error::format("bitstream ends in the middle of a code"));
    }
    if out.len() as u64 != expected {
        return Err(Error::format(format!(
            "decoded {} bytes but the frequency table sums to {expected}",
            out.len()
        )));
    }

    Ok(out)
}
