use ahash::AHashMap as HashMap;

/// Number of single-byte literal codes every dictionary starts with.
pub const LZW_LITERALS: usize = 256;

/// Maximum number of entries, the full 12-bit code space.
pub const LZW_MAX_ENTRIES: usize = 4096;

/// Adaptive string/code table shared by the LZW encoder and decoder.
///
/// Codes `0..256` are always the single-byte literals and new codes are
/// handed out in increasing order from 256. Once [`LZW_MAX_ENTRIES`] entries
/// exist, [`add`](Self::add) does nothing and the table is frozen.
#[derive(Debug, Clone)]
pub struct LzwDictionary {
    string_to_code: HashMap<Vec<u8>, u16>,
    code_to_string: Vec<Vec<u8>>,
}

impl LzwDictionary {
    /// Creates a dictionary holding the 256 literals.
    pub fn new() -> Self {
        let mut dict = Self {
            string_to_code: HashMap::with_capacity(LZW_MAX_ENTRIES),
            code_to_string: Vec::with_capacity(LZW_MAX_ENTRIES),
        };
        dict.initialize();
        dict
    }

    /// Resets to the 256 literals, next code 256.
    pub fn initialize(&mut self) {
        self.string_to_code.clear();
        self.code_to_string.clear();

        for byte in 0..=u8::MAX {
            self.string_to_code.insert(vec![byte], u16::from(byte));
            self.code_to_string.push(vec![byte]);
        }
    }

    /// Code assigned to `s`, if any.
    pub fn search(&self, s: &[u8]) -> Option<u16> {
        self.string_to_code.get(s).copied()
    }

    /// Assigns the next free code to `s`.
    ///
    /// Returns the new code, or `None` when the dictionary is full.
    pub fn add(&mut self, s: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        // Below the cap, so the code fits in 12 bits.
        let code = self.code_to_string.len() as u16;
        self.string_to_code.insert(s.clone(), code);
        self.code_to_string.push(s);
        Some(code)
    }

    /// The string a code stands for.
    pub fn entry_for(&self, code: u16) -> Option<&[u8]> {
        self.code_to_string.get(code as usize).map(Vec::as_slice)
    }

    /// The code the next [`add`](Self::add) would assign.
    pub fn next_code(&self) -> usize {
        self.code_to_string.len()
    }

    /// Number of entries, literals included.
    pub fn len(&self) -> usize {
        self.code_to_string.len()
    }

    /// Never true: the literals are always present.
    pub fn is_empty(&self) -> bool {
        self.code_to_string.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.code_to_string.len() >= LZW_MAX_ENTRIES
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_literals() {
        let dict = LzwDictionary::new();
        assert_eq!(dict.len(), LZW_LITERALS);
        assert_eq!(dict.next_code(), 256);
        for byte in 0..=u8::MAX {
            assert_eq!(dict.search(&[byte]), Some(u16::from(byte)));
            assert_eq!(dict.entry_for(u16::from(byte)), Some(&[byte][..]));
        }
    }

    #[test]
    fn test_search_missing() {
        let dict = LzwDictionary::new();
        assert_eq!(dict.search(b"ab"), None);
        assert_eq!(dict.entry_for(256), None);
    }

    #[test]
    fn test_add_assigns_sequential_codes() {
        let mut dict = LzwDictionary::new();
        assert_eq!(dict.add(b"ab".to_vec()), Some(256));
        assert_eq!(dict.add(b"bc".to_vec()), Some(257));
        assert_eq!(dict.search(b"bc"), Some(257));
        assert_eq!(dict.entry_for(256), Some(&b"ab"[..]));
    }

    #[test]
    fn test_add_stops_at_cap() {
        let mut dict = LzwDictionary::new();
        for i in 0..(LZW_MAX_ENTRIES - LZW_LITERALS) {
            let s = (i as u32).to_be_bytes().to_vec();
            assert!(dict.add(s).is_some());
        }
        assert!(dict.is_full());
        assert_eq!(dict.len(), LZW_MAX_ENTRIES);

        assert_eq!(dict.add(b"overflow".to_vec()), None);
        assert_eq!(dict.len(), LZW_MAX_ENTRIES);
        assert_eq!(dict.search(b"overflow"), None);
    }

    #[test]
    fn test_initialize_resets() {
        let mut dict = LzwDictionary::new();
        dict.add(b"xyz".to_vec());
        dict.initialize();
        assert_eq!(dict.len(), LZW_LITERALS);
        assert_eq!(dict.search(b"xyz"), None);
    }
}
