use crate::filename::Filename;
use crate::slot::next_free_slot;
use log::debug;

/// Derives the name for a duplicate of `source`, given every filename
/// currently present in the target directory.
///
/// Names sharing the source's stem form its family; each member occupies
/// the copy number its marker spells out, the original occupying `0`. The
/// duplicate takes the lowest free number, so holes left by deleted copies
/// are filled before a new maximum is minted.
///
/// The result shares the source's stem and extension and collides with no
/// name in `existing`. The listing is a point-in-time snapshot: the caller
/// owns any mutual exclusion around the list, compute, create sequence.
pub fn next_copy_name<'a, I>(existing: I, source: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let source = Filename::parse(source);

    // The source occupies its own slot even when the caller's listing no
    // longer contains it, so the occupied set is never empty and copying
    // an already-deleted original still yields its first copy name.
    let mut occupied = vec![source.copy_number()];
    occupied.extend(
        existing
            .into_iter()
            .map(Filename::parse)
            .filter(|file| file.is_same_family(&source))
            .map(|file| file.copy_number()),
    );

    let number =
        next_free_slot(&occupied).expect("occupied slots always include the source's own");
    debug!(
        "{} family member(s) of {:?} in listing, next copy number is {number}",
        occupied.len() - 1,
        source.stem(),
    );
    source.with_copy_number(number)
}
