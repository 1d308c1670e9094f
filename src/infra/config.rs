use std::{env, net::SocketAddr};

use secrecy::{ExposeSecret, SecretString};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: SecretString,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("0.0.0.0:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let db_host = env::var("PGHOST").unwrap_or("localhost".to_string());

        let db_port: u16 = env::var("PGPORT")
            .unwrap_or("5432".to_string())
            .parse()
            .expect("PGPORT must be a valid port number");

        let db_name = env::var("PGDATABASE").unwrap_or("email_service".to_string());
        let db_user = env::var("PGUSER").unwrap_or("vtl_service".to_string());
        let db_password: SecretString =
            SecretString::new(env::var("PGPASSWORD").unwrap_or("vtl_password".to_string()).into());

        let db_max_connections: u32 = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or("5".to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid number");

        Self {
            bind_addr,
            db_host,
            db_port,
            db_name,
            db_user,
            db_password,
            db_max_connections,
        }
    }

    /// Connection string assembled from the individual PG* parts.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user,
            self.db_password.expose_secret(),
            self.db_host,
            self.db_port,
            self.db_name
        )
    }
}
