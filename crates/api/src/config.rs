use memo_core::datetime::{DateFormat, DEFAULT_DISPLAY_OFFSET_HOURS};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    #[allow(dead_code)]
    pub shutdown_timeout_secs: u64,
    /// Session cookie lifetime in days (default: `30`).
    pub session_expiry_days: i64,
    /// Display timezone offset in hours east of UTC (default: `9`, Asia/Tokyo).
    pub display_tz_offset_hours: i32,
    /// Accepted wire format for deadline dates (default: slash, `YYYY/MM/DD`).
    pub deadline_date_format: DateFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                       |
    /// | `SESSION_EXPIRY_DAYS`     | `30`                       |
    /// | `DISPLAY_TZ_OFFSET_HOURS` | `9`                        |
    /// | `DEADLINE_DATE_FORMAT`    | `slash`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let session_expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        let display_tz_offset_hours: i32 = std::env::var("DISPLAY_TZ_OFFSET_HOURS")
            .unwrap_or_else(|_| DEFAULT_DISPLAY_OFFSET_HOURS.to_string())
            .parse()
            .expect("DISPLAY_TZ_OFFSET_HOURS must be a valid i32");

        let deadline_date_format = match std::env::var("DEADLINE_DATE_FORMAT")
            .unwrap_or_else(|_| "slash".into())
            .as_str()
        {
            "slash" => DateFormat::SlashYmd,
            "dash" => DateFormat::DashYmd,
            other => panic!("DEADLINE_DATE_FORMAT must be 'slash' or 'dash', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            session_expiry_days,
            display_tz_offset_hours,
            deadline_date_format,
        }
    }

    /// The configured display offset as a chrono [`chrono::FixedOffset`].
    pub fn display_offset(&self) -> chrono::FixedOffset {
        memo_core::datetime::display_offset(self.display_tz_offset_hours)
    }
}
