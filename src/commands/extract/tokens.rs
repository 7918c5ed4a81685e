const THOUSANDS_SEPARATOR: char = ',';

pub fn is_numeric_token(token: &str) -> bool {
    if token.len() > 1 && token.starts_with('0') {
        return false;
    }

    let mut digits = token
        .chars()
        .filter(|character| *character != THOUSANDS_SEPARATOR)
        .peekable();
    digits.peek().is_some() && digits.all(|character| character.is_ascii_digit())
}

pub fn numeric_value(token: &str) -> Option<u64> {
    let stripped = token.replace(THOUSANDS_SEPARATOR, "");
    if stripped.is_empty() || !stripped.chars().all(|character| character.is_ascii_digit()) {
        return None;
    }
    stripped.parse::<u64>().ok()
}
