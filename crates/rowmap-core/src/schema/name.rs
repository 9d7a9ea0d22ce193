/// Converts an upper-camel-case field name to its snake_case column name.
///
/// The first character is lower-cased without a separator. Every later
/// upper-case character becomes `_` followed by its lower-case form. Acronyms
/// get no special treatment: `HTTPCode` maps to `h_t_t_p_code`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();

    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
    }

    for ch in chars {
        if ch.is_uppercase() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
