use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use geosector::SectorSpec;
use posts::PostsConfig;
use serde::{Deserialize, Serialize};

/// Layered application configuration:
/// defaults -> YAML file (if provided) -> env (`PROXIFEED__*`) -> CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub nearby: NearbyConfig,
    pub posts: PostsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8087),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "postgres://localhost:5432/proxifeed".to_owned(),
        }
    }
}

/// Sector bucketing: bucket width in meters plus the SRID all stored
/// points are interpreted under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyConfig {
    pub distance_m: f64,
    pub srid: i32,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            distance_m: 100.0,
            srid: 4326,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// # Errors
    /// Returns an error when the YAML file or environment overrides do not
    /// deserialize into the expected shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("PROXIFEED__").split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// The startup gate for geo configuration: a non-positive bucket width
    /// is fatal here, never per request.
    ///
    /// # Errors
    /// Returns `geosector::GeoError::InvalidBucketWidth` for a
    /// non-positive or non-finite `nearby.distance_m`.
    pub fn sector_spec(&self) -> std::result::Result<SectorSpec, geosector::GeoError> {
        SectorSpec::new(self.nearby.distance_m, self.nearby.srid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.nearby.distance_m, 100.0);
        assert_eq!(cfg.nearby.srid, 4326);
        assert!(cfg.sector_spec().is_ok());
    }

    #[test]
    fn yaml_and_env_layer_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "proxifeed.yaml",
                r"
nearby:
  distance_m: 250.0
server:
  bind_addr: 0.0.0.0:9000
",
            )?;
            jail.set_env("PROXIFEED__NEARBY__SRID", "3857");

            let cfg = AppConfig::load(Some(Path::new("proxifeed.yaml"))).unwrap();
            assert_eq!(cfg.nearby.distance_m, 250.0);
            assert_eq!(cfg.nearby.srid, 3857);
            assert_eq!(cfg.server.bind_addr.port(), 9000);
            // Untouched sections keep their defaults.
            assert_eq!(cfg.posts.default_limit, 25);
            Ok(())
        });
    }

    #[test]
    fn non_positive_bucket_width_fails_validation() {
        let cfg = AppConfig {
            nearby: NearbyConfig {
                distance_m: 0.0,
                srid: 4326,
            },
            ..AppConfig::default()
        };
        assert!(cfg.sector_spec().is_err());
    }
}
