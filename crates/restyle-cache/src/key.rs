//! Cache key normalization.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `input`.
pub fn digest_hex(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Build the storage key `<group>:<key>`.
///
/// Keys longer than `max_len` are replaced by `<group>:#<sha256>` rather than
/// truncated, so two long keys sharing a prefix never collide. The group
/// prefix is kept so group clearing still matches hashed keys.
pub fn normalize_key(group: &str, key: &str, max_len: usize) -> String {
    let full = format!("{group}:{key}");
    if full.len() <= max_len {
        return full;
    }
    format!("{group}:#{}", digest_hex(&full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_pass_through() {
        assert_eq!(normalize_key("css", "committed:abc", 172), "css:committed:abc");
    }

    #[test]
    fn long_keys_are_hashed_to_fixed_length() {
        let long = "x".repeat(500);
        let key = normalize_key("css", &long, 172);
        assert!(key.starts_with("css:#"));
        assert_eq!(key.len(), "css:#".len() + 64);
    }

    #[test]
    fn similar_long_keys_do_not_collide() {
        let a = format!("{}a", "x".repeat(300));
        let b = format!("{}b", "x".repeat(300));
        assert_ne!(normalize_key("css", &a, 172), normalize_key("css", &b, 172));
    }

    #[test]
    fn digest_is_stable() {
        assert_eq!(
            digest_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
