/// Reduces a raw identifier to its canonical form: uppercase, ASCII digits
/// and 'X' only. Everything else is dropped, so an all-invalid input
/// normalizes to the empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(|ch| ch.is_ascii_digit() || *ch == 'X')
        .collect()
}
