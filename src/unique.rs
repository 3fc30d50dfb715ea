//! Pseudo-unique identifiers

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_LENGTH: usize = 8;

/// Random alphanumeric string of `len` characters
///
/// Zero selects the default length; lengths beyond the alphabet size (62)
/// are capped.
pub fn pseudo_unique(len: usize) -> String {
    pseudo_unique_with(&mut rand::thread_rng(), len)
}

pub fn pseudo_unique_with<R: Rng>(rng: &mut R, len: usize) -> String {
    let len = match len {
        0 => DEFAULT_LENGTH,
        n => n.min(ALPHABET.len()),
    };

    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lengths() {
        assert_eq!(pseudo_unique(0).len(), 8);
        assert_eq!(pseudo_unique(12).len(), 12);
        assert_eq!(pseudo_unique(500).len(), 62);
    }

    #[test]
    fn test_alphanumeric() {
        let id = pseudo_unique(62);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let a = pseudo_unique_with(&mut StdRng::seed_from_u64(7), 16);
        let b = pseudo_unique_with(&mut StdRng::seed_from_u64(7), 16);
        assert_eq!(a, b);
    }
}
