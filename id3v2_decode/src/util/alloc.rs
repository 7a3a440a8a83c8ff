use crate::error::Result;
use crate::macros::err;

/// Provides the `try_with_capacity_stable` method on `Vec`
pub(crate) trait VecFallibleCapacity<T>: Sized {
	/// Same as `Vec::with_capacity`, but takes `limit` into account and reports allocation failures.
	///
	/// Named `try_with_capacity_stable` to avoid conflicts with the nightly `Vec::try_with_capacity`.
	fn try_with_capacity_stable(capacity: usize, limit: usize) -> Result<Self>;
}

impl<T> VecFallibleCapacity<T> for Vec<T> {
	fn try_with_capacity_stable(capacity: usize, limit: usize) -> Result<Self> {
		if capacity > limit {
			err!(TooMuchData);
		}

		let mut v = Vec::new();
		v.try_reserve(capacity)?;

		Ok(v)
	}
}

/// Copy `bytes` into a new `Vec`, so the result does not borrow from the input
pub(crate) fn fallible_copy(bytes: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut copy = Vec::try_with_capacity_stable(bytes.len(), limit)?;
	copy.extend_from_slice(bytes);
	Ok(copy)
}
