// src/utils/code.rs

use crate::config::QUIZ_CODE_LENGTH;

/// A short join code: the leading hex digits of a random v4 UUID.
pub fn generate_quiz_code() -> String {
    let mut code = uuid::Uuid::new_v4().simple().to_string();
    code.truncate(QUIZ_CODE_LENGTH);
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_short_lowercase_hex() {
        let code = generate_quiz_code();
        assert_eq!(code.len(), QUIZ_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn codes_rarely_repeat() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_quiz_code()).collect();
        assert!(codes.len() > 990);
    }
}
