use sha1::{Digest, Sha1};

/// Produce the `mysql_native_password` challenge response.
///
/// `SHA1( password ) ^ SHA1( seed + SHA1( SHA1( password ) ) )`
///
/// <https://mariadb.com/kb/en/library/connection/#mysql_native_password-plugin>
pub(crate) fn scramble(password: &str, seed: &[u8]) -> Vec<u8> {
    // accounts without a password authenticate with an empty response,
    // not a digest of the empty string
    if password.is_empty() {
        return Vec::new();
    }

    let mut ctx = Sha1::new();

    ctx.update(password.as_bytes());
    let mut pw_hash = ctx.finalize_reset();

    ctx.update(pw_hash.as_slice());
    let pw_hash_hash = ctx.finalize_reset();

    ctx.update(seed);
    ctx.update(pw_hash_hash.as_slice());
    let pw_seed_hash_hash = ctx.finalize();

    for (dst, src) in pw_hash.iter_mut().zip(pw_seed_hash_hash.as_slice()) {
        *dst ^= *src;
    }

    pw_hash.to_vec()
}

#[cfg(test)]
mod tests {
    use super::scramble;

    const SEED: &[u8] = b"abcdefghijklmnopqrst";

    #[test]
    fn it_computes_the_known_token() {
        assert_eq!(hex::encode(scramble("password", SEED)), "bfdd49584b917d42c758edd2a7a541f721843041");
    }

    #[test]
    fn it_is_deterministic() {
        assert_eq!(scramble("password", SEED), scramble("password", SEED));
    }

    #[test]
    fn it_changes_with_the_password() {
        assert_eq!(hex::encode(scramble("passwore", SEED)), "89b0a6c7c7e93cab1e6d09ab67325a5368dfcb61");
    }

    #[test]
    fn it_changes_with_the_seed() {
        assert_eq!(
            hex::encode(scramble("password", b"abcdefghijklmnopqrsu")),
            "5bddde631214505f3a3035ac2dea20ee2bd9ec12"
        );
    }

    #[test]
    fn it_is_empty_for_an_empty_password() {
        assert!(scramble("", SEED).is_empty());
    }
}
