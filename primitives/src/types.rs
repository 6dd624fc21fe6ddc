//! Core type aliases and constants for the kvledger chaincode.

/// 32-byte digest used for state roots.
pub type Hash = [u8; 32];

/// Name under which every chaincode event is emitted.
pub const EVENT_NAME: &str = "cevent";

/// Ledger key seeded by `init`.
pub const INIT_KEY: &str = "hello_world";

/// Maximum key length accepted by the reference host.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the reference host.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// A zero-valued hash (32 zero bytes).
pub const ZERO_HASH: Hash = [0u8; 32];

/// Convert a `Hash` to a hex string for display purposes.
pub fn hash_to_hex(hash: &Hash) -> alloc::string::String {
    let mut s = alloc::string::String::with_capacity(66);
    s.push_str("0x");
    for byte in hash {
        use core::fmt::Write;
        let _ = write!(s, "{:02x}", byte);
    }
    s
}
