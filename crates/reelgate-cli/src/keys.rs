use reelgate_core::provisioning::hash_provisioning_key;

/// Bytes of entropy in a generated provisioning key.
pub const KEY_BYTES: usize = 32;

/// A fresh random provisioning key, hex encoded.
pub fn generate_key() -> String {
    let bytes: [u8; KEY_BYTES] = rand::random();
    hex::encode(bytes)
}

/// The value to put in `ADMIN_KEY_HASH` for `key`.
pub fn provisioning_hash(key: &str) -> String {
    hash_provisioning_key(key)
}

pub fn env_line(key: &str) -> String {
    format!("ADMIN_KEY_HASH={}", provisioning_hash(key))
}
