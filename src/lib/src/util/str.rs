pub fn split_and_trim(input: &str, delimiter: &str) -> Vec<String> {
    input
        .split(delimiter)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect::<Vec<String>>()
}

/// First `max_chars` characters of `input`, never splitting a code point
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => input[..idx].to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_trim_drops_blanks() {
        assert_eq!(
            split_and_trim(" temple, heritage ,, ancient ,", ","),
            vec!["temple", "heritage", "ancient"]
        );
        assert!(split_and_trim("  ", ",").is_empty());
    }

    #[test]
    fn test_truncate_chars_is_char_aware() {
        assert_eq!(truncate_chars("मंदिर temple", 3), "मंद");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
