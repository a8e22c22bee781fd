//! Shared constant values for test setup.
//!
//! These values are placeholders for testing purposes, not real
//! credentials or live CDN versions.

/// DDragon data version used for all mocked CDN requests.
///
/// Mock endpoint paths and the test client must agree on this value since
/// it is part of every data URL.
pub static TEST_DDRAGON_VERSION: &str = "13.14.1";

/// Plaintext password used wherever a test needs a known credential.
pub static TEST_PASSWORD: &str = "poro-snax-4life";
