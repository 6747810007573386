//! Capacity-doubling storage on top of `Vec`, with allocation failure
//! reported instead of aborting.

use std::collections::TryReserveError;

/// Empty sequence with room for `capacity` items (at least one).
pub fn with_capacity<T>(capacity: usize) -> Result<Vec<T>, TryReserveError> {
	let mut items = Vec::new();
	items.try_reserve_exact(capacity.max(1))?;
	Ok(items)
}

/// Appends `item`, doubling the capacity first when the sequence is full.
pub fn push<T>(items: &mut Vec<T>, item: T) -> Result<(), TryReserveError> {
	if items.len() == items.capacity() {
		let additional = items.capacity().max(1);
		items.try_reserve_exact(additional)?;
	}
	items.push(item);
	Ok(())
}
