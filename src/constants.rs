/// Payload bits written to the low end of each image sample.
/// Two bits per sample keeps the carrier visually indistinguishable from
/// the original for photographic material.
pub const DEFAULT_BITS_PER_SAMPLE: usize = 2;

/// A sample is an 8-bit channel value, so at most 8 payload bits fit in one.
pub const MAX_BITS_PER_SAMPLE: usize = 8;

/// Code-unit width of the retired fixed-width text codec.
/// Accepted in [`Config`](crate::engine::Config) for compatibility; the
/// byte-aligned codec does not read it.
pub const LEGACY_CODE_UNIT_WIDTH: usize = 7;

/// AES-256-GCM key size in bytes.
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce size in bytes, prepended to every sealed payload.
pub const NONCE_LEN: usize = 12;
