//! # Reelgate Store
//!
//! Account storage for Reelgate.
//!
//! Gating and login code only ever talk to [`AccountRepository`], so the
//! in-memory collections here can be swapped for a persistent store without
//! touching them.
//!
//! - [`repository`]: The repository trait and its error type
//! - [`memory`]: In-process implementation
//! - [`directory`]: The customer and administrator collections
//! - [`seed`]: Demo accounts for local runs
//!
//! # Example
//!
//! ```ignore
//! use reelgate_store::AccountDirectory;
//! use reelgate_models::{Account, AccountKind, Role};
//!
//! let directory = AccountDirectory::in_memory();
//! directory
//!     .collection(AccountKind::Customer)
//!     .insert(Account::new("Alice", hash, Role::User))
//!     .await?;
//! ```

pub mod directory;
pub mod memory;
pub mod repository;
pub mod seed;

// Re-export commonly used types at crate root
pub use directory::AccountDirectory;
pub use memory::InMemoryAccountRepository;
pub use repository::{AccountRepository, StoreError};
pub use seed::{SeedError, seed_demo_accounts};
