use crate::huffman_tree::{HuffmanNode, HuffmanTree};
use bitvec::prelude::*;

/// A single prefix code, most significant bit first.
pub type PrefixCode = BitVec<u8, Msb0>;

/// Byte value to prefix code.
///
/// Codes are assigned only at leaves, so no code is a prefix of another.
#[derive(Debug, Clone)]
pub struct PrefixCodeTable {
    codes: Vec<Option<PrefixCode>>,
}

impl PrefixCodeTable {
    /// Walks the tree depth first, `0` for left and `1` for right.
    ///
    /// A tree that is a lone leaf gets the one bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; 256];
        let mut stack = vec![(tree.root(), PrefixCode::new())];

        while let Some((key, code)) = stack.pop() {
            match *tree.node(key) {
                HuffmanNode::Leaf { byte, .. } => {
                    let code = if code.is_empty() { bitvec![u8, Msb0; 0] } else { code };
                    codes[byte as usize] = Some(code);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push(true);
                    stack.push((right, right_code));

                    let mut left_code = code;
                    left_code.push(false);
                    stack.push((left, left_code));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, byte: u8) -> Option<&PrefixCode> {
        self.codes[byte as usize].as_ref()
    }

    /// Assigned codes in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &PrefixCode)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_ref().map(|code| (byte as u8, code)))
    }

    /// Number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn code_string(code: &PrefixCode) -> String {
        code.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
    }

    fn codes_for(entries: &[(u8, u64)]) -> PrefixCodeTable {
        let table = FrequencyTable::from_entries(entries.iter().copied()).unwrap();
        PrefixCodeTable::from_tree(&HuffmanTree::build(&table).unwrap())
    }

    #[test]
    fn test_code_generation() {
        // Worked example from https://opendsa-server.cs.vt.edu/ODSA/Books/CS3/html/Huffman.html
        let codes = codes_for(&[
            (b'C', 32),
            (b'D', 42),
            (b'E', 120),
            (b'K', 7),
            (b'L', 42),
            (b'M', 24),
            (b'U', 37),
            (b'Z', 2),
        ]);

        let lengths: Vec<(u8, usize)> = codes.iter().map(|(b, code)| (b, code.len())).collect();
        assert_eq!(
            lengths,
            vec![
                (b'C', 4),
                (b'D', 3),
                (b'E', 1),
                (b'K', 6),
                (b'L', 3),
                (b'M', 5),
                (b'U', 3),
                (b'Z', 6),
            ]
        );
        assert_eq!(code_string(codes.get(b'E').unwrap()), "0");
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let codes = codes_for(&[(b'a', 42)]);
        assert_eq!(codes.len(), 1);
        assert_eq!(code_string(codes.get(b'a').unwrap()), "0");
    }

    #[test]
    fn test_two_symbols() {
        let codes = codes_for(&[(b'a', 1), (b'b', 9)]);
        assert_eq!(code_string(codes.get(b'a').unwrap()), "0");
        assert_eq!(code_string(codes.get(b'b').unwrap()), "1");
    }

    #[test]
    fn test_missing_byte_has_no_code() {
        let codes = codes_for(&[(b'a', 1), (b'b', 9)]);
        assert!(codes.get(b'c').is_none());
    }
}
