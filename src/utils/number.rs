/// Reads the integer at the start of `input`, ignoring anything after it.
///
/// Accepts leading whitespace and an optional sign: `"2)"` gives `Some(2)`,
/// `" -1"` gives `Some(-1)`, `"abc"` or `""` give `None`. Values that do not
/// fit in an `i64` also give `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let digits_start = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..digits_start + digits_len].parse().ok()
}
