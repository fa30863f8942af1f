//! Reading-time estimate

/// Words per minute assumed for the estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `body`, rounded up and never less than one
///
/// # Examples
/// ```ignore
/// reading_time("") // -> 1
/// ```
pub fn reading_time(body: &str) -> usize {
    word_count(body).div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_reading_time_boundaries() {
        assert_eq!(reading_time(&words(200)), 1);
        assert_eq!(reading_time(&words(201)), 2);
        assert_eq!(reading_time(&words(400)), 2);
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("   \n\t "), 1);
    }

    #[test]
    fn test_word_count_mixed_whitespace() {
        assert_eq!(word_count("<p>one two</p>\n\nthree\tfour"), 4);
    }
}
