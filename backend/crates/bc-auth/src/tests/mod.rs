
use crate::TokenCodec;

use chrono::Duration;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_codec() -> TokenCodec {
    TokenCodec::with_hs256(TEST_SECRET, Duration::days(365))
}
