use nutype::nutype;

/// `#RRGGBB` hex color attached to an element.
#[nutype(
    sanitize(trim, uppercase),
    validate(predicate = |value: &str| is_hex_color(value)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Color(String);

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
