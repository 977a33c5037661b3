//! Text analysis: vowel counting, palindrome checking

/// Count case-insensitive occurrences of a/e/i/o/u.
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Check whether a string reads the same forwards and backwards, ignoring
/// case and anything that is not alphanumeric. The empty string counts.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels("hello"), 2);
        assert_eq!(count_vowels("HELLO"), 2);
        assert_eq!(count_vowels("xyz"), 0);
        assert_eq!(count_vowels(""), 0);
        assert_eq!(count_vowels("aeiouAEIOU"), 10);
        assert_eq!(count_vowels("rhythm"), 0);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("aba"));
        assert!(is_palindrome("a b a"));
        assert!(is_palindrome("Aba"));
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_is_palindrome_ignores_punctuation() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("No 'x' in Nixon"));
    }

    #[test]
    fn test_is_palindrome_edge_cases() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("!!")); // nothing alphanumeric left
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("12345"));
    }
}
