//! Machine-word definitions and single-word bit primitives.

//	Bit indices are always derived from slice lengths supplied by the caller,
//	so indexing here is the caller's contract rather than ours.
#![allow(clippy::indexing_slicing, reason = "Bounds are the caller's contract")]



//		Modules																											

#[cfg(test)]
#[path = "tests/bits.rs"]
mod tests;



//		Type aliases																									

/// The machine word that all word arrays are made of.
pub type Word = usize;

/// A word of twice the width of [`Word`], used for widening multiplication.
pub(crate) type DoubleWord = u128;



//		Constants																										

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Mask that selects the bit index within a word, i.e. `WORD_BITS - 1`.
pub const SHIFT_MASK: usize = WORD_BITS - 1;

/// Difference between the width of the native leading-zero primitive and the
/// width of a [`Word`].
/// 
/// The primitive operates on a 64-bit value, so on a 32-bit target it reports
/// 32 more leading zeros than the word really has.
/// 
pub const CLZ_CORRECTION: u32 = u64::BITS - Word::BITS;

/// Shift that turns a bit index into a word index, i.e. `log2(WORD_BITS)`.
pub(crate) const WORD_INDEX_SHIFT: u32 = Word::BITS.trailing_zeros();

const _: () = assert!(Word::BITS <= u64::BITS, "Word must not be wider than 64 bits");



//		Functions																										

//		leading_zeros															
/// Counts the leading zero bits of a word.
/// 
/// Only meaningful for a nonzero word. Callers use this to derive bit lengths
/// from a normalised most-significant word, which is never zero unless the
/// whole value is zero.
/// 
/// # Parameters
/// 
/// * `word` - The word to inspect.
/// 
#[must_use]
pub const fn leading_zeros(word: Word) -> u32 {
	(word as u64).leading_zeros() - CLZ_CORRECTION
}

//		trailing_zeros															
/// Counts the trailing zero bits of a word.
/// 
/// Only meaningful for a nonzero word.
/// 
/// # Parameters
/// 
/// * `word` - The word to inspect.
/// 
#[must_use]
pub const fn trailing_zeros(word: Word) -> u32 {
	word.trailing_zeros()
}

//		get_bit																	
/// Gets the value of a specific bit of a word array.
/// 
/// # Parameters
/// 
/// * `words` - The word array, least-significant word first.
/// * `index` - The position of the bit, where `0` is the least-significant
///             bit of the first word.
/// 
/// # Panics
/// 
/// Panics if `index` lies beyond the end of `words`.
/// 
#[must_use]
pub fn get_bit(words: &[Word], index: usize) -> bool {
	let mask: Word = 1 << (index & SHIFT_MASK);
	words[index >> WORD_INDEX_SHIFT] & mask != 0
}

//		set_bit																	
/// Sets the value of a specific bit of a word array.
/// 
/// # Parameters
/// 
/// * `words` - The word array, least-significant word first.
/// * `index` - The position of the bit, where `0` is the least-significant
///             bit of the first word.
/// * `value` - The value to set the bit to.
/// 
/// # Panics
/// 
/// Panics if `index` lies beyond the end of `words`.
/// 
pub fn set_bit(words: &mut [Word], index: usize, value: bool) {
	let mask: Word = 1 << (index & SHIFT_MASK);
	if value {
		words[index >> WORD_INDEX_SHIFT] |= mask;
	} else {
		words[index >> WORD_INDEX_SHIFT] &= !mask;
	}
}

//		radix_limb																
/// Finds the largest power of a radix that fits in a single word.
/// 
/// Returns the number of radix digits that the power spans, and the power
/// itself. A word array of limbs in base `power` can then be rendered by
/// [`digits_to_string()`](crate::unsigned::digits_to_string()) using the
/// digit count as the fixed padding width. For radix 10 on a 64-bit target
/// this is `(19, 10^19)`.
/// 
/// # Parameters
/// 
/// * `radix` - The radix, which must be at least 2.
/// 
/// # Panics
/// 
/// Panics if `radix` is less than 2, as no finite power would be the largest.
/// 
#[must_use]
pub const fn radix_limb(radix: Word) -> (usize, Word) {
	assert!(radix >= 2, "Radix must be at least 2");
	let mut digits      = 0;
	let mut power: Word = 1;
	while let Some(next) = power.checked_mul(radix) {
		power   = next;
		digits += 1;
	}
	(digits, power)
}
