use crate::error::EmptySlotSet;
use std::collections::HashSet;

/// Finds the lowest free slot among a set of occupied copy numbers: the
/// first integer missing from the contiguous range `[min, max]`, or
/// `max + 1` when the range has no hole. Duplicates occupy one slot.
///
/// Reusing the lowest hole keeps numbering dense when copies are deleted:
/// with `sarah.txt` and `sarah copy 2.txt` on disk, the next duplicate
/// becomes `sarah copy.txt` rather than `sarah copy 3.txt`.
///
/// The occupied set must not be empty; an empty set is a caller bug and
/// yields [`EmptySlotSet`] rather than a made-up slot. Occupied numbers
/// stay below `u32::MAX` (the marker parser never produces `u32::MAX`),
/// so a free successor slot always exists.
pub fn next_free_slot(occupied: &[u32]) -> Result<u32, EmptySlotSet> {
    let lo = *occupied.iter().min().ok_or(EmptySlotSet)?;
    let hi = *occupied.iter().max().ok_or(EmptySlotSet)?;
    let taken: HashSet<u32> = occupied.iter().copied().collect();
    Ok((lo..=hi)
        .find(|slot| !taken.contains(slot))
        .unwrap_or_else(|| hi.checked_add(1).expect("slot overflow")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_first_hole_in_the_range() {
        assert_eq!(next_free_slot(&[0, 1, 2, 8, 3, 4, 6, 7]), Ok(5));
        assert_eq!(next_free_slot(&[0, 2]), Ok(1));
        assert_eq!(next_free_slot(&[2, 4]), Ok(3));
    }

    #[test]
    fn extends_past_the_maximum_when_the_range_is_full() {
        assert_eq!(next_free_slot(&[0, 1]), Ok(2));
        assert_eq!(next_free_slot(&[0]), Ok(1));
        assert_eq!(next_free_slot(&[3]), Ok(4));
    }

    #[test]
    fn works_at_the_top_of_the_numbering_range() {
        assert_eq!(next_free_slot(&[u32::MAX - 1]), Ok(u32::MAX));
        assert_eq!(
            next_free_slot(&[u32::MAX - 3, u32::MAX - 1]),
            Ok(u32::MAX - 2)
        );
    }

    #[test]
    fn duplicates_occupy_a_single_slot() {
        assert_eq!(next_free_slot(&[0, 0, 1, 1]), Ok(2));
        assert_eq!(next_free_slot(&[0, 2, 2]), Ok(1));
    }

    #[test]
    fn rejects_an_empty_set() {
        assert_eq!(next_free_slot(&[]), Err(EmptySlotSet));
    }
}
