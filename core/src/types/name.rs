use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 64;

/// Display name of a record.
///
/// Surrounding whitespace is stripped on construction; an empty result is
/// rejected, so every stored record carries a searchable name.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Name(String);

/// Stable identity of a record within its collection.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
))]
pub struct RecordId(u64);
