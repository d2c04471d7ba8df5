//! Masking of secrets (access tokens) for safe logging.

/// Masks a token for logging: first 4 chars + `***` + last 4 chars.
/// Tokens of 16 chars or fewer are fully masked as `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 16 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
