//! Shared helpers for the unit tests: a reference oracle, and strategies for
//! generating word arrays.



//		Packages																										

use crate::{
	bits::{WORD_BITS, Word},
	unsigned::actual_count,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};
use proptest::{collection::vec, prelude::*};



//		Constants																										

/// A word with only its top bit set.
pub(crate) const TOP_BIT: Word = 1 << (WORD_BITS - 1);



//		Functions																										

//		to_big																	
/// Converts a magnitude word array to the reference type.
pub(crate) fn to_big(words: &[Word]) -> BigUint {
	words.iter().rev().fold(BigUint::zero(), |acc, &word| (acc << WORD_BITS) + BigUint::from(word))
}

//		from_big																
/// Converts a reference value to a normalised magnitude word array.
pub(crate) fn from_big(value: &BigUint) -> Vec<Word> {
	let mask      = BigUint::from(Word::MAX);
	let mut rest  = value.clone();
	let mut words = Vec::new();
	while !rest.is_zero() {
		words.push((&rest & &mask).to_usize().unwrap());
		rest >>= WORD_BITS;
	}
	if words.is_empty() {
		words.push(0);
	}
	words
}

//		to_signed_big															
/// Converts a sign-flagged magnitude to the reference signed type.
pub(crate) fn to_signed_big(words: &[Word], negative: bool) -> BigInt {
	BigInt::from_biguint(if negative { Sign::Minus } else { Sign::Plus }, to_big(words))
}

//		from_signed_big															
/// Converts a reference signed value to a sign-flagged magnitude.
pub(crate) fn from_signed_big(value: &BigInt) -> (Vec<Word>, bool) {
	(from_big(value.magnitude()), value.sign() == Sign::Minus)
}

//		word																	
/// Generates words with a bias towards the carry and sign boundaries.
pub(crate) fn word() -> impl Strategy<Value = Word> {
	prop_oneof![
		4 => any::<Word>(),
		1 => Just(0),
		1 => Just(1),
		1 => Just(Word::MAX),
		1 => Just(TOP_BIT),
	]
}

//		magnitude																
/// Generates normalised magnitudes of one to six words.
pub(crate) fn magnitude() -> impl Strategy<Value = Vec<Word>> {
	vec(word(), 1..7).prop_map(|mut words| {
		words.truncate(actual_count(&words));
		words
	})
}

//		nonzero_magnitude														
/// Generates normalised magnitudes that are not zero.
pub(crate) fn nonzero_magnitude() -> impl Strategy<Value = Vec<Word>> {
	magnitude().prop_filter("nonzero", |words| words != &[0])
}

//		signed_value															
/// Generates sign-flagged magnitudes, never negative zero.
pub(crate) fn signed_value() -> impl Strategy<Value = (Vec<Word>, bool)> {
	(magnitude(), any::<bool>()).prop_map(|(words, negative)| {
		let negative = negative && words != [0];
		(words, negative)
	})
}
