use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Shared secret used to sign access tokens. No fallback value;
    /// startup fails without it.
    pub jwt_secret: String,
    /// Signing algorithm. Set via CYBERHQ_JWT_ALGORITHM. Default: HS256.
    pub jwt_algorithm: String,
    /// Access token lifetime in minutes.
    /// Set via CYBERHQ_TOKEN_TTL_MINUTES. Default: 30.
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Resolve the configured algorithm name into the `jsonwebtoken` type.
    pub fn algorithm(&self) -> anyhow::Result<Algorithm> {
        self.jwt_algorithm
            .parse()
            .map_err(|_| anyhow::anyhow!("unsupported JWT algorithm: {}", self.jwt_algorithm))
    }
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let jwt_secret = match std::env::var("CYBERHQ_JWT_SECRET") {
        Ok(s) if !s.trim().is_empty() => s,
        _ => anyhow::bail!(
            "CYBERHQ_JWT_SECRET is not set. \
             Tokens cannot be signed without a secret; refusing to start."
        ),
    };

    Ok(Config {
        port: std::env::var("CYBERHQ_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .unwrap_or(8080),
        jwt_secret,
        jwt_algorithm: std::env::var("CYBERHQ_JWT_ALGORITHM").unwrap_or_else(|_| "HS256".into()),
        token_ttl_minutes: std::env::var("CYBERHQ_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30),
    })
}
