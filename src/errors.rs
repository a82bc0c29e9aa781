//! Contains error types used throughout the library.



//		Packages																										

use thiserror::Error as ThisError;



//		Enums																											

//		PreconditionError														
/// Represents all possible precondition violations reported by the checked
/// operations.
/// 
/// The unchecked kernel trusts its caller. Each of these variants describes a
/// call that the unchecked kernel would either panic on or, worse, answer with
/// a silently wrong result.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum PreconditionError {
	/// The output buffer is smaller than the operation's worst case.
	#[error("Output buffer too small: needed {needed} but got {actual}")]
	BufferTooSmall {
		/// The minimum capacity the operation requires.
		needed: usize,
		
		/// The capacity that was supplied.
		actual: usize,
	},
	
	/// The divisor is zero.
	#[error("Division by zero")]
	DivisionByZero,
	
	/// An output that is used as an accumulator was not zero-initialised.
	#[error("Accumulator is not zeroed: {0}")]
	DirtyAccumulator(&'static str),
	
	/// An operand has no words at all.
	#[error("Empty operand: {0}")]
	EmptyOperand(&'static str),
	
	/// The operands of an equal-length operation differ in length.
	#[error("Length mismatch: {0} != {1}")]
	LengthMismatch(usize, usize),
	
	/// The shift amount is not less than the word width.
	#[error("Shift amount out of range: {0}")]
	ShiftOutOfRange(u32),
	
	/// A signed operand's sign flag disagrees with the top bit of its
	/// two's-complement words.
	#[error("Sign flag does not match sign bit: {0}")]
	SignMismatch(&'static str),
	
	/// The subtrahend is larger than the minuend.
	#[error("Subtraction underflow")]
	Underflow,
	
	/// An operand carries superfluous most-significant zero words.
	#[error("Operand is not normalised: {0}")]
	Unnormalized(&'static str),
}
