use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    pub supabase_url: String,
    pub supabase_anon_key: String,

    /// Rows per listing page.
    pub page_size: usize,
}

impl Config {
    pub fn new(
        env: Environment,
        supabase_url: impl Into<String>,
        supabase_anon_key: impl Into<String>,
    ) -> Self {
        Self {
            env,
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
            page_size: query::DEFAULT_PER_PAGE,
        }
    }

    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let env = Environment::from_str(&env::var("APP_ENV").unwrap_or_default());
        let supabase_url = env::var("SUPABASE_URL").unwrap_or_default();
        let supabase_anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(query::DEFAULT_PER_PAGE);

        Self {
            env,
            supabase_url,
            supabase_anon_key,
            page_size,
        }
    }
}
