//! LZW container: a code count followed by one `i32` per code.
//!
//! ```text
//! u64 code count
//! i32 code * count
//! ```

use crate::error::{Error, Result};
use crate::lzw_dictionary::{LzwDictionary, LZW_MAX_ENTRIES};
use crate::wire::ByteReader;
use log::debug;

const CODE_SIZE: usize = 4;

/// Greedy longest-match encoding of `data` into dictionary codes.
pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut dict = LzwDictionary::new();
    let mut codes = Vec::new();

    let Some((&first, rest)) = data.split_first() else {
        return codes;
    };
    let mut current = vec![first];

    for &byte in rest {
        current.push(byte);
        if dict.search(&current).is_some() {
            continue;
        }
        let extended = current.clone();
        current.pop();
        // `current` was found on the previous step, or is a literal.
        if let Some(code) = dict.search(&current) {
            codes.push(code);
        }
        dict.add(extended);
        current.clear();
        current.push(byte);
    }
    if let Some(code) = dict.search(&current) {
        codes.push(code);
    }

    debug!(
        "lzw: {} input bytes -> {} codes, dictionary at {}/{} entries",
        data.len(),
        codes.len(),
        dict.len(),
        LZW_MAX_ENTRIES
    );
    codes
}

/// Inverts [`encode_codes`].
pub fn decode_codes(codes: &[u16]) -> Result<Vec<u8>> {
    let mut dict = LzwDictionary::new();
    let mut out = Vec::new();

    let Some((&first, rest)) = codes.split_first() else {
        return Ok(out);
    };
    let mut previous = dict
        .entry_for(first)
        .ok_or_else(|| Error::format(format!("first code {first} is not a literal")))?
        .to_vec();
    out.extend_from_slice(&previous);

    for (index, &code) in rest.iter().enumerate() {
        let current = match dict.entry_for(code) {
            Some(entry) => entry.to_vec(),
            // The encoder emitted the entry it was about to add.
            None if code as usize == dict.next_code() && !dict.is_full() => {
                let mut synthesized = previous.clone();
                synthesized.push(previous[0]);
                synthesized
            }
            None => {
                return Err(Error::format(format!(
                    "code {code} at position {} is outside the dictionary (next code {})",
                    index + 1,
                    dict.next_code()
                )))
            }
        };
        out.extend_from_slice(&current);

        let mut entry = previous;
        entry.push(current[0]);
        dict.add(entry);
        previous = current;
    }

    Ok(out)
}

/// Compresses `data` into an LZW container.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::Input("cannot LZW-encode empty input".to_string()));
    }
    let codes = encode_codes(data);

    let mut out = Vec::with_capacity(8 + codes.len() * CODE_SIZE);
    out.extend_from_slice(&(codes.len() as u64).to_le_bytes());
    for code in codes {
        out.extend_from_slice(&i32::from(code).to_le_bytes());
    }
    Ok(out)
}

/// Restores the bytes stored in an LZW container.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    let mut reader = ByteReader::new(container);
    let count = reader.read_u64("code count")?;

    let fits = usize::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(CODE_SIZE))
        .is_some_and(|len| len == reader.remaining());
    if !fits {
        return Err(Error::format(format!(
            "code count {count} does not match {} bytes of codes",
            reader.remaining()
        )));
    }

    let mut codes = Vec::with_capacity(reader.remaining() / CODE_SIZE);
    for position in 0..count {
        let code = reader.read_i32("code")?;
        let code = u16::try_from(code)
            .ok()
            .filter(|&code| (code as usize) < LZW_MAX_ENTRIES)
            .ok_or_else(|| {
                Error::format(format!("code {code} at position {position} is out of range"))
            })?;
        codes.push(code);
    }

    decode_codes(&codes)
}
