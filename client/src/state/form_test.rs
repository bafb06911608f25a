use super::*;

// =============================================================
// sign-in
// =============================================================

#[test]
fn signin_requires_username_and_password() {
    let errors = validate_signin(&Credentials::signin("", "")).unwrap_err();
    assert_eq!(errors.username, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.name, None);
}

#[test]
fn signin_missing_password_only_flags_password() {
    let errors = validate_signin(&Credentials::signin("a@b.com", "")).unwrap_err();
    assert_eq!(errors.username, None);
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn signin_does_not_check_email_shape_or_length() {
    assert_eq!(validate_signin(&Credentials::signin("alice", "x")), Ok(()));
}

// =============================================================
// sign-up
// =============================================================

#[test]
fn signup_accepts_valid_credentials() {
    assert_eq!(validate_signup(&Credentials::signup("a@b.com", "Al", "secret")), Ok(()));
}

#[test]
fn signup_reports_every_missing_field() {
    let errors = validate_signup(&Credentials::default()).unwrap_err();
    assert_eq!(
        errors,
        FieldErrors {
            username: Some("Email is required"),
            name: Some("Name is required"),
            password: Some("Password is required"),
        }
    );
}

#[test]
fn signup_rejects_malformed_email() {
    let errors = validate_signup(&Credentials::signup("not-an-email", "Alice", "secret")).unwrap_err();
    assert_eq!(errors.username, Some("Please enter a valid email address"));
    assert_eq!(errors.name, None);
}

#[test]
fn signup_enforces_minimum_lengths() {
    let errors = validate_signup(&Credentials::signup("a@b.com", "A", "12345")).unwrap_err();
    assert_eq!(errors.name, Some("Name must be at least 2 characters long"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters long"));
}

#[test]
fn signup_counts_characters_not_bytes() {
    assert_eq!(validate_signup(&Credentials::signup("a@b.com", "Zoë", "pässwö")), Ok(()));
    let errors = validate_signup(&Credentials::signup("a@b.com", "é", "secret")).unwrap_err();
    assert_eq!(errors.name, Some("Name must be at least 2 characters long"));
}

// =============================================================
// email shape
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_email_shaped("a@b.co"));
    assert!(is_email_shaped("first.last+tag@mail.example.org"));
}

#[test]
fn email_shape_rejects_bad_addresses() {
    for bad in ["", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@@b.com", "a@b@c.com", "plain"] {
        assert!(!is_email_shaped(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn clear_drops_only_the_edited_field() {
    let mut errors = validate_signin(&Credentials::signin("", "")).unwrap_err();
    errors.clear(Field::Username);
    assert_eq!(errors.get(Field::Username), None);
    assert_eq!(errors.get(Field::Password), Some("Password is required"));
    errors.clear(Field::Password);
    assert!(errors.is_empty());
}
