/// Derives a shelf code from an author surname and a title, in the style of
/// a Cutter-Sanborn author number: uppercase surname initial, a three-digit
/// number derived from the surname's second letter, and the lowercase title
/// initial. `shelf_code("Smith", "Dune")` is `"S250d"`.
///
/// The letter table is a deliberately simplified stand-in for a real
/// Cutter-Sanborn table. Returns `None` when either input is empty.
pub fn shelf_code(surname: &str, title: &str) -> Option<String> {
    let upper = surname.to_uppercase();
    let mut chars = upper.chars();
    let initial = chars.next()?;
    let number = pad_number(number_part(chars.next()));
    let title_initial: String = title.chars().next()?.to_lowercase().collect();

    Some(format!("{initial}{number}{title_initial}"))
}

fn number_part(second: Option<char>) -> &'static str {
    match second {
        Some('A') => "1",
        Some('E') => "2",
        Some('I') => "3",
        Some('O') => "4",
        Some('U') => "5",
        Some('S') => "6",
        Some('T') => "7",
        _ => "25",
    }
}

fn pad_number(number: &str) -> String {
    let mut padded = number.to_owned();
    while padded.len() < 3 {
        padded.push('0');
    }
    padded
}
