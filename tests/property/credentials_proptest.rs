//! Property-based tests for password hashing and access tokens
//!
//! bcrypt is slow even at cost 4, so the case counts are kept small.

use proptest::prelude::*;
use user_accounts::backend::auth::{PasswordHasher, TokenIssuer};
use uuid::Uuid;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_verifies_only_original(
        password in "[ -~]{1,40}",
        other in "[ -~]{1,40}",
    ) {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash(&password).unwrap();

        prop_assert!(hash.starts_with("$2b$04$"));
        prop_assert!(hasher.verify(&password, &hash));
        prop_assert_eq!(hasher.verify(&other, &hash), other == password);
    }

    #[test]
    fn test_long_passwords_never_share_a_hash(
        prefix in "[ -~]{72}",
        suffix in "[ -~]{1,20}",
    ) {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash(&prefix).unwrap();

        let long_password = format!("{}{}", prefix, suffix);
        prop_assert!(hasher.hash(&long_password).is_err());
        prop_assert!(!hasher.verify(&long_password, &hash));
    }

    #[test]
    fn test_verify_never_panics_on_garbage(password in ".*", hash in ".*") {
        let _ = PasswordHasher::new(4).verify(&password, &hash);
    }
}

proptest! {
    #[test]
    fn test_token_carries_identity(
        username in "[a-zA-Z0-9_.-]{1,32}",
        role in "[a-z]{0,12}",
        id in any::<u128>(),
    ) {
        let issuer = TokenIssuer::new("property-secret");
        let user_id = Uuid::from_u128(id);

        let token = issuer.issue(user_id, &username, &role).unwrap();
        let claims = issuer.verify(&token).unwrap();

        prop_assert_eq!(claims.user_id, user_id);
        prop_assert_eq!(claims.username, username);
        prop_assert_eq!(claims.role, role);
        prop_assert_eq!(claims.iss, "evermos");
        prop_assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_tampered_token_rejected(flip in 0usize..512) {
        let issuer = TokenIssuer::new("property-secret");
        let token = issuer.issue(Uuid::new_v4(), "alice", "user").unwrap();

        let mut bytes = token.into_bytes();
        let index = flip % bytes.len();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(issuer.verify(&tampered).is_err());
    }
}
