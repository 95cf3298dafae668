use static_assertions::assert_impl_all;

/// A filename split into the parts the copy-name convention cares about:
/// the stem, the copy number its marker spells out, and the extension.
///
/// `"sarah copy 2.txt"` parses as stem `"sarah"`, copy number `2`,
/// extension `".txt"`. A name without a marker is an original and carries
/// copy number `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filename<'a> {
    stem: &'a str,
    copy_number: u32,
    extension: &'a str,
}

assert_impl_all!(Filename<'static>: Send, Sync);

impl<'a> Filename<'a> {
    /// Total over any input string; a name that matches no marker pattern
    /// degrades to "original with the whole body as stem".
    pub fn parse(name: &'a str) -> Filename<'a> {
        let (body, extension) = split_extension(name);
        match split_copy_marker(body) {
            Some((stem, number)) => Filename {
                stem,
                copy_number: number.unwrap_or(1),
                extension,
            },
            None => Filename {
                stem: body,
                copy_number: 0,
                extension,
            },
        }
    }

    pub fn stem(&self) -> &'a str {
        self.stem
    }

    /// The extension including its leading dot, or `""` for none.
    pub fn extension(&self) -> &'a str {
        self.extension
    }

    /// `0` = original, `1` = bare `" copy"` marker, `N` = `" copy N"`.
    pub fn copy_number(&self) -> u32 {
        self.copy_number
    }

    /// Two names belong to the same document family when they share a
    /// stem; the extension is not part of the family identity, so
    /// `sarah.txt` and `sarah copy.md` occupy slots in one family.
    pub fn is_same_family(&self, other: &Filename<'_>) -> bool {
        self.stem == other.stem
    }

    /// Formats the family member occupying `number`.
    pub fn with_copy_number(&self, number: u32) -> String {
        match number {
            0 => format!("{}{}", self.stem, self.extension),
            1 => format!("{} copy{}", self.stem, self.extension),
            n => format!("{} copy {n}{}", self.stem, self.extension),
        }
    }
}

/// Splits `name` at the last dot. A dot in the leading position does not
/// start an extension, so dotfiles keep their full name as the body.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(at) if at > 0 => name.split_at(at),
        _ => (name, ""),
    }
}

/// Recognizes a trailing copy marker in a name body (the part before the
/// extension): a single space, the word `copy`, optionally one more space
/// and decimal digits. Returns the stem in front of the marker and the
/// captured number, if any.
///
/// The word `copy` anywhere else in the body is not a marker. Digits too
/// large for `u32`, and `u32::MAX` itself (which would leave no room for a
/// successor slot), invalidate the marker entirely so that stem and copy
/// number never disagree about whether one was present.
fn split_copy_marker(body: &str) -> Option<(&str, Option<u32>)> {
    if let Some(stem) = body.strip_suffix(" copy") {
        return Some((stem, None));
    }
    let (front, digits) = body.rsplit_once(' ')?;
    let stem = front.strip_suffix(" copy")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number = digits.parse().ok().filter(|&number| number < u32::MAX)?;
    Some((stem, Some(number)))
}
