//! Validation property tests
//!
//! Email shapes and book field rules over generated input.

use book_catalog::backend::books::BookInput;
use book_catalog::shared::validation::is_valid_email;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_generated_emails_are_valid(user in "[a-z]{1,10}", domain in "[a-z]{1,10}", tld in "[a-z]{2,3}") {
        let email = format!("{user}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_strings_without_at_are_not_emails(s in "[^@]*") {
        prop_assert!(!is_valid_email(&s));
    }

    #[test]
    fn test_negative_price_always_rejected(price in -1.0e9f64..-1.0e-9) {
        let input = BookInput {
            title: Some("Title".to_string()),
            author: Some("Author".to_string()),
            genre: Some("Fiction".to_string()),
            price: Some(price),
            in_stock: None,
        };

        let errors = input.into_new_book().unwrap_err();
        prop_assert!(errors.has_field("price"));
    }

    #[test]
    fn test_valid_book_accepted(title in "[A-Za-z ]{1,100}", price in 0.0f64..1.0e6) {
        prop_assume!(!title.trim().is_empty());
        let input = BookInput {
            title: Some(title.clone()),
            author: Some("Author".to_string()),
            genre: Some("History".to_string()),
            price: Some(price),
            in_stock: Some(false),
        };

        let book = input.into_new_book().unwrap();
        prop_assert_eq!(book.title, title.trim());
        prop_assert!(!book.in_stock);
    }

    #[test]
    fn test_non_ascii_local_part_never_valid(user in "[a-z]{0,5}[à-ÿ][a-z]{0,5}") {
        let email = format!("{user}@example.com");
        prop_assert!(!is_valid_email(&email));
    }
}
