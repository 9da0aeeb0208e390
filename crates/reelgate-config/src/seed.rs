use std::env;

/// Demo account seeding (`SEED_DEMO_ACCOUNTS`, `DEMO_ACCOUNT_PASSWORD`).
#[derive(Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub enabled: bool,
    pub password: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            enabled: crate::parse_flag(var("SEED_DEMO_ACCOUNTS"), true),
            password: var("DEMO_ACCOUNT_PASSWORD")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "password".to_string()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            password: String::new(),
        }
    }
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
