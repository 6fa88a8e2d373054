//! String helpers for deriving accessor names from field names.

/// Derives the accessor-name suffix for a field name: `foo` becomes `Foo`,
/// which yields `getFoo`/`setFoo`/`withFoo`.
///
/// A one-letter lowercase prefix followed by an uppercase letter is treated
/// as Hungarian-style notation and dropped: `mFoo` becomes `Foo`.
/// Single-letter names are uppercased wholesale.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return s.to_uppercase();
    };

    if first.is_lowercase() && second.is_uppercase() {
        let mut out: String = second.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    } else {
        let mut out: String = first.to_uppercase().collect();
        out.push(second);
        out.push_str(chars.as_str());
        out
    }
}

/// True when the name starts with a single lowercase letter immediately
/// followed by an uppercase one (`mFoo`, `pCount`).
pub fn has_one_letter_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(a), Some(b)) if a.is_lowercase() && b.is_uppercase()
    )
}
