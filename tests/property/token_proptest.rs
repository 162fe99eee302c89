//! Token property tests
//!
//! Issued tokens round-trip their subject; any altered or foreign token is
//! reported as invalid, never as expired.

use std::time::Duration;

use book_catalog::backend::auth::{TokenError, TokenService};
use proptest::prelude::*;
use uuid::Uuid;

fn tokens() -> TokenService {
    TokenService::new("property-secret", Duration::from_secs(3600))
}

proptest! {
    #[test]
    fn test_token_roundtrip_preserves_identity(bytes in any::<[u8; 16]>()) {
        let user_id = Uuid::from_bytes(bytes);
        let service = tokens();

        let token = service.issue(user_id).unwrap();
        prop_assert_eq!(service.verify(&token).unwrap().sub, user_id);
    }

    #[test]
    fn test_tampered_token_never_verifies(index in 0usize..1000, replacement in "[A-Za-z0-9_-]") {
        let service = tokens();
        let token = service.issue(Uuid::new_v4()).unwrap();

        let index = index % token.len();
        let original = &token[index..index + 1];
        prop_assume!(original != "." && original != replacement.as_str());

        let mut tampered = token.clone();
        tampered.replace_range(index..index + 1, &replacement);
        prop_assert!(matches!(service.verify(&tampered), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_foreign_secret_never_verifies(secret in "[a-z]{8,32}") {
        prop_assume!(secret != "property-secret");
        let token = TokenService::new(&secret, Duration::from_secs(3600)).issue(Uuid::new_v4()).unwrap();

        prop_assert!(matches!(tokens().verify(&token), Err(TokenError::Invalid(_))));
    }
}
