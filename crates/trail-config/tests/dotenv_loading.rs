//! `.env` handling of `TrailConfig::load_with_dotenv`.
//!
//! Kept in its own test binary: dotenvy writes to the process environment,
//! which `figment::Jail` does not restore.

use figment::Jail;
use pretty_assertions::assert_eq;
use trail_config::TrailConfig;

#[test]
fn project_env_file_wins_over_root_env_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".trail")?;
        jail.create_file(
            ".trail/.env",
            "TRAIL_CLIENT__BASE_URL=https://project.example.com\n\
             TRAIL_CLIENT__TOKEN=project-token\n",
        )?;
        jail.create_file(
            ".env",
            "TRAIL_CLIENT__TOKEN=root-token\nTRAIL_CLIENT__API_KEY=root-key\n",
        )?;

        let config = TrailConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.client.base_url, "https://project.example.com");
        assert_eq!(config.client.token, "project-token");
        assert_eq!(config.client.api_key, "root-key");
        assert!(config.client.is_configured());
        Ok(())
    });
}
