//! # Reelgate
//!
//! A small rental storefront built with Rust and Axum that demonstrates
//! session-based authentication and role-based authorization gating.
//!
//! ## Overview
//!
//! - **Accounts**: two in-memory collections, customers and administrators,
//!   behind the [`reelgate_store::AccountRepository`] trait
//! - **Sessions**: server-side sessions (tower-sessions) addressed by a signed
//!   cookie, holding a snapshot of the signed-in account
//! - **Gates**: a chain of middleware checks run before gated handlers
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # The gate chain
//! │   ├── session.rs   # session-presence gate
//! │   ├── role.rs      # role-membership gate
//! │   └── provisioning.rs # admin provisioning-key gate
//! ├── modules/          # Feature modules
//! │   ├── pages/       # Home page and templates
//! │   ├── auth/        # Login and registration
//! │   └── actions/     # Gated rental and admin actions
//! ├── logging.rs        # Tracing setup and request logging
//! ├── metrics.rs        # Prometheus metrics
//! ├── router.rs         # Main application router
//! ├── session.rs        # Session layer and helpers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated form extractor
//! ```
//!
//! ## Roles
//!
//! Roles carry no hierarchy. Each gated route lists exactly the roles it
//! admits:
//!
//! | Route | Roles |
//! |-------|-------|
//! | `/rentMovie` | user, member, memberPlus |
//! | `/rentShow` | member, memberPlus |
//! | `/rentMovieHD`, `/rentShowHD` | memberPlus |
//! | `/editMovies`, `/editShows`, `/changeCustomerRoles` | admin, headAdmin |
//! | `/removeAdmin` | headAdmin |
//!
//! ## Gate order
//!
//! Every gated action runs the session-presence gate first, then the
//! role-membership gate configured for that route, then the handler.
//! `POST /registerAdmin` runs only the provisioning-key gate.
//!
//! ## Environment Variables
//!
//! ```bash
//! BIND_ADDR=0.0.0.0:3000
//! SESSION_SECRET=a-long-random-string
//! ADMIN_KEY_HASH=$(reelgate-cli hash-key --key my-admin-key)
//! BCRYPT_COST=10
//! SEED_DEMO_ACCOUNTS=true
//! DEMO_ACCOUNT_PASSWORD=password
//! ```

pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod session;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use reelgate_config;
pub use reelgate_core;
pub use reelgate_models;
pub use reelgate_store;
