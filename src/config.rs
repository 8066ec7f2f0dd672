//! Runtime configuration from environment variables
//!
//! | Variable          | Default   | Meaning                                        |
//! |-------------------|-----------|------------------------------------------------|
//! | `PORT`            | `3000`    | HTTP listen port                               |
//! | `BIND_ADDR`       | `0.0.0.0` | HTTP listen address                            |
//! | `GENDER_FALLBACK` | `male`    | `male` or `reject` for unrecognised genders    |
//! | `ALLOWED_ORIGINS` | unset     | Comma-separated CORS origins; unset = any      |
//! | `VALIDATE_TABLES` | `true`    | Run the reference-table check at startup       |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::reference::GenderFallback;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub gender_fallback: GenderFallback,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub validate_tables: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            gender_fallback: GenderFallback::Male,
            allowed_origins: Vec::new(),
            validate_tables: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value lookup. Unparseable values keep the default
    /// and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or_default(&lookup, "PORT", defaults.port, |raw| raw.parse().ok());
        let bind_addr =
            parse_or_default(&lookup, "BIND_ADDR", defaults.bind_addr, |raw| raw.parse().ok());
        let gender_fallback = parse_or_default(
            &lookup,
            "GENDER_FALLBACK",
            defaults.gender_fallback,
            GenderFallback::parse,
        );
        let validate_tables =
            parse_or_default(&lookup, "VALIDATE_TABLES", defaults.validate_tables, parse_bool);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port,
            bind_addr,
            gender_fallback,
            allowed_origins,
            validate_tables,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or_default<F, T, P>(lookup: &F, key: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match parse(raw.trim()) {
            Some(value) => value,
            None => {
                tracing::warn!("Ignoring invalid {}='{}', using default", key, raw);
                default
            }
        },
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
