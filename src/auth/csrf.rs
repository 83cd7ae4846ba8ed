use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Generate a CSRF token for form protection.
pub fn generate_csrf_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Compare a submitted token with the session's, in constant time.
#[must_use]
pub fn verify_csrf_token(expected: &str, submitted: &str) -> bool {
    if expected.is_empty() || expected.len() != submitted.len() {
        return false;
    }
    expected
        .bytes()
        .zip(submitted.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_csrf_token() {
        let token1 = generate_csrf_token();
        let token2 = generate_csrf_token();

        assert_eq!(token1.len(), 32);
        assert_eq!(token2.len(), 32);
        assert_ne!(token1, token2);
        assert!(token1.chars().all(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_verify_csrf_token() {
        let token = generate_csrf_token();
        assert!(verify_csrf_token(&token, &token.clone()));
        assert!(!verify_csrf_token(&token, &generate_csrf_token()));
        assert!(!verify_csrf_token(&token, ""));
        assert!(!verify_csrf_token("", ""));
    }
}
