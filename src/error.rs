use thiserror::Error;

/// Contract breach: [`next_free_slot`](crate::next_free_slot) was handed an
/// empty set of occupied numbers. Defaulting to a slot here would claim a
/// gap that was never observed, so the error is surfaced instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot pick a free copy number from an empty set of occupied numbers")]
pub struct EmptySlotSet;
