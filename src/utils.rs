use crate::masks::COFACTOR_MASKS;
use std::io::{Read, Write};

/// Largest supported number of input variables.
pub const MAX_VARIABLES_COUNT: usize = 20;

/// Number of input variables whose assignments are packed inside one 64-bit word.
pub const VARIABLES_PER_WORD: usize = 6;

pub(crate) const WORD_BITS: usize = 64;

/// Index of the word holding the truth value at `pos`.
#[inline]
pub(crate) const fn block(pos: usize) -> usize {
    pos / WORD_BITS
}

/// Bit offset of the truth value at `pos` inside its word.
#[inline]
pub(crate) const fn shift(pos: usize) -> usize {
    pos % WORD_BITS
}

#[inline]
pub(crate) const fn block_count(variables_count: usize) -> usize {
    ((1 << variables_count) + WORD_BITS - 1) / WORD_BITS
}

/// Mask of the meaningful bits of a word; all ones from 6 variables on.
#[inline]
pub(crate) const fn word_mask(variables_count: usize) -> u64 {
    if variables_count >= VARIABLES_PER_WORD {
        u64::MAX
    } else {
        u64::MAX >> (WORD_BITS - (1 << variables_count))
    }
}

/// Bits of block `block_index` where variable `var` is 1.
#[inline]
pub(crate) fn literal_pattern(var: usize, block_index: usize) -> u64 {
    if var < VARIABLES_PER_WORD {
        COFACTOR_MASKS[var]
    } else {
        0u64.wrapping_sub(((block_index >> (var - VARIABLES_PER_WORD)) & 1) as u64)
    }
}

/// Permutes the bits of `word` so that bit `t` of the result is bit `t ^ flips` of the input.
///
/// Only the low 6 bits of `flips` are used.
pub(crate) fn flip_word_variables(mut word: u64, flips: usize) -> u64 {
    for (var, mask) in COFACTOR_MASKS.iter().enumerate() {
        if flips & (1 << var) != 0 {
            let distance = 1 << var;
            word = ((word & mask) >> distance) | ((word & !mask) << distance);
        }
    }
    word
}

#[inline]
#[cfg_attr(feature = "unsafe_disable_safety_checks", allow(unused_variables))]
pub(crate) fn check_variable_index(var: usize, variables_count: usize) {
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    {
        if var >= variables_count {
            panic!(
                "{} {}, got {}",
                crate::truth_table_error::VARIABLE_OUT_OF_RANGE_PANIC_MSG,
                variables_count,
                var
            );
        }
    }
}

pub(crate) fn write_u64<W: Write>(writer: &mut W, value: u64) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

pub(crate) fn write_i64<W: Write>(writer: &mut W, value: i64) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

pub(crate) fn write_bool<W: Write>(writer: &mut W, value: bool) -> std::io::Result<()> {
    writer.write_all(&[value as u8])
}

pub(crate) fn read_u64<R: Read>(reader: &mut R) -> std::io::Result<u64> {
    let mut buffer = [0u8; 8];
    reader.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

pub(crate) fn read_i64<R: Read>(reader: &mut R) -> std::io::Result<i64> {
    let mut buffer = [0u8; 8];
    reader.read_exact(&mut buffer)?;
    Ok(i64::from_le_bytes(buffer))
}

/// `None` if the byte is neither 0 nor 1.
pub(crate) fn read_bool<R: Read>(reader: &mut R) -> std::io::Result<Option<bool>> {
    let mut buffer = [0u8; 1];
    reader.read_exact(&mut buffer)?;
    Ok(match buffer[0] {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_and_shift() {
        assert_eq!(block(0), 0);
        assert_eq!(shift(0), 0);
        assert_eq!(block(63), 0);
        assert_eq!(shift(63), 63);
        assert_eq!(block(64), 1);
        assert_eq!(shift(64), 0);
        assert_eq!(block(1000), 15);
        assert_eq!(shift(1000), 40);
        for pos in 0..5000 {
            assert_eq!(block(pos) * WORD_BITS + shift(pos), pos);
        }
    }

    #[test]
    fn test_block_count() {
        for variables_count in 0..=6 {
            assert_eq!(block_count(variables_count), 1);
        }
        assert_eq!(block_count(7), 2);
        assert_eq!(block_count(10), 16);
        assert_eq!(block_count(20), 16384);
    }

    #[test]
    fn test_word_mask() {
        assert_eq!(word_mask(0), 0x1);
        assert_eq!(word_mask(1), 0x3);
        assert_eq!(word_mask(2), 0xf);
        assert_eq!(word_mask(5), 0xffffffff);
        assert_eq!(word_mask(6), u64::MAX);
        assert_eq!(word_mask(12), u64::MAX);
    }

    #[test]
    fn test_literal_pattern() {
        assert_eq!(literal_pattern(0, 3), 0xaaaaaaaaaaaaaaaa);
        assert_eq!(literal_pattern(5, 0), 0xffffffff00000000);
        assert_eq!(literal_pattern(6, 0), 0);
        assert_eq!(literal_pattern(6, 1), u64::MAX);
        assert_eq!(literal_pattern(7, 1), 0);
        assert_eq!(literal_pattern(7, 2), u64::MAX);
        assert_eq!(literal_pattern(7, 3), u64::MAX);
    }

    #[test]
    fn test_flip_word_variables() {
        let word = 0x0123456789abcdefu64;
        for flips in 0..64 {
            let flipped = flip_word_variables(word, flips);
            for t in 0..64 {
                assert_eq!((flipped >> t) & 1, (word >> (t ^ flips)) & 1);
            }
        }
        assert_eq!(flip_word_variables(0b0010, 1), 0b0001);
        assert_eq!(flip_word_variables(0b0010, 3), 0b0100);
    }

    #[test]
    fn test_stream_helpers() {
        let mut buffer = Vec::new();
        write_u64(&mut buffer, 0x0123456789abcdef).unwrap();
        write_i64(&mut buffer, -1).unwrap();
        write_bool(&mut buffer, true).unwrap();
        buffer.push(7);
        assert_eq!(buffer.len(), 18);

        let mut reader = buffer.as_slice();
        assert_eq!(read_u64(&mut reader).unwrap(), 0x0123456789abcdef);
        assert_eq!(read_i64(&mut reader).unwrap(), -1);
        assert_eq!(read_bool(&mut reader).unwrap(), Some(true));
        assert_eq!(read_bool(&mut reader).unwrap(), None);
        assert!(read_u64(&mut reader).is_err());
    }

    #[test]
    #[should_panic]
    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    fn test_check_variable_index_panics() {
        check_variable_index(3, 3);
    }
}
