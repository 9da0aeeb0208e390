//! # Reelgate CLI
//!
//! Helpers behind the `reelgate-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use reelgate_cli::keys::{generate_key, provisioning_hash};
//!
//! let key = generate_key();
//! println!("ADMIN_KEY_HASH={}", provisioning_hash(&key));
//! ```

pub mod keys;
