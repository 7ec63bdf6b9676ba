use nutype::nutype;

/// A single entry of the list: user input with surrounding whitespace removed.
///
/// Construction fails for empty or whitespace-only input. Duplicates are
/// allowed; the list imposes no uniqueness.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
    )
)]
pub struct Element(String);
