use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__RSVP_TEST_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__RSVP_TEST_EP_VALID__", "8080") };
    let val: u16 = env_parse("__RSVP_TEST_EP_VALID__", 0);
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__RSVP_TEST_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__RSVP_TEST_EP_INVALID__", "lots") };
    let val: usize = env_parse("__RSVP_TEST_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__RSVP_TEST_EP_INVALID__") };
}

#[test]
fn env_parse_out_of_range_returns_default() {
    unsafe { std::env::set_var("__RSVP_TEST_EP_RANGE__", "70000") };
    let val: u16 = env_parse("__RSVP_TEST_EP_RANGE__", 3000);
    assert_eq!(val, 3000);
    unsafe { std::env::remove_var("__RSVP_TEST_EP_RANGE__") };
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn default_config_uses_documented_values() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, 5);
    assert_eq!(cfg.max_body_bytes, 10 * 1024 * 1024);
    assert!(cfg.static_dir.ends_with("public"));
}
