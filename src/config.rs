use std::env;

/// Listen address of the collection server the relay submits to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    host_name: String,
    port_no: u16,
}

impl ServerConfig {
    pub fn host_name(&self) -> &str { &self.host_name }
    pub fn port_no(&self) -> u16 { self.port_no }
}

/// Database connection details, owned and used by the collection server.
/// Carried here unchanged so both processes read one configuration shape.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    host: String,
    name: String,
}

impl DatabaseConfig {
    pub fn host(&self) -> &str { &self.host }
    pub fn name(&self) -> &str { &self.name }
}

/// All runtime settings, gathered in one place and built exactly once at
/// startup. Components receive what they need from here instead of reading
/// the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    server: ServerConfig,
    database: DatabaseConfig,
    /// Location tag stamped onto every submitted reading.
    location: String,
    /// CSV file holding the example sensor readings.
    readings_path: String,
    /// JSON catalog holding the debris records.
    catalog_path: String,
    /// Window size the debris display is laid out for.
    window_width: f64,
    window_height: f64,
}

impl Config {
    /// Builds the configuration from environment variables, falling back to
    /// the defaults of the course material for anything unset.
    ///
    /// # Returns
    /// A fully populated `Config`.
    pub fn from_env() -> Self {
        let port_no = env::var("GROUNDLINK_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3030);
        let window_width = env::var("GROUNDLINK_VIEW_W")
            .ok()
            .and_then(|w| w.parse::<f64>().ok())
            .unwrap_or(1280.0);
        let window_height = env::var("GROUNDLINK_VIEW_H")
            .ok()
            .and_then(|h| h.parse::<f64>().ok())
            .unwrap_or(720.0);
        Self {
            server: ServerConfig {
                host_name: env::var("GROUNDLINK_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port_no,
            },
            database: DatabaseConfig {
                host: env::var("GROUNDLINK_DB_HOST")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                name: env::var("GROUNDLINK_DB_NAME").unwrap_or_else(|_| "air_quality".to_string()),
            },
            location: env::var("GROUNDLINK_LOCATION")
                .unwrap_or_else(|_| "brisbanecbd".to_string()),
            readings_path: env::var("GROUNDLINK_READINGS")
                .unwrap_or_else(|_| "data/brisbane-aq.csv".to_string()),
            catalog_path: env::var("GROUNDLINK_CATALOG")
                .unwrap_or_else(|_| "data/us-space-junk.json".to_string()),
            window_width,
            window_height,
        }
    }

    pub fn server(&self) -> &ServerConfig { &self.server }
    pub fn database(&self) -> &DatabaseConfig { &self.database }
    pub fn location(&self) -> &str { &self.location }
    pub fn readings_path(&self) -> &str { &self.readings_path }
    pub fn catalog_path(&self) -> &str { &self.catalog_path }
    pub fn window_width(&self) -> f64 { self.window_width }
    pub fn window_height(&self) -> f64 { self.window_height }

    /// Base URL for reading submissions, derived from the server section so
    /// the relay and the server always agree on the address.
    pub fn submit_base_url(&self) -> String {
        format!("http://{}:{}", self.server.host_name, self.server.port_no)
    }
}
