use foodloop_domain::constants::{DONATIONS_SLICE, DONATIONS_TAG, IDENTITY_SLICE, SYSTEM_TAG};

#[test]
fn slice_names_are_lowercase_keys() {
    for name in [IDENTITY_SLICE, DONATIONS_SLICE] {
        assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{name}");
    }
    assert_ne!(IDENTITY_SLICE, DONATIONS_SLICE);
}

#[test]
fn openapi_tags() {
    assert_eq!(SYSTEM_TAG, "System");
    assert_eq!(DONATIONS_TAG, "Donations");
}
