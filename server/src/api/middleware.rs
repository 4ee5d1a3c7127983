//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::IntoResponse;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::core::config::is_all_interfaces;

/// Allowed origins configuration
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    /// Create allowed origins from host and port configuration.
    ///
    /// `extra` comes from `server.cors_origins` (e.g. a separately hosted UI).
    pub fn new(host: &str, port: u16, extra: &[String]) -> Self {
        let mut origins = Vec::new();
        let dev_port = port.saturating_add(1);
        let is_all = is_all_interfaces(host);

        let base_hosts: Vec<&str> = if is_all || host == "127.0.0.1" || host == "localhost" {
            vec!["localhost", "127.0.0.1"]
        } else {
            vec![host]
        };

        for h in &base_hosts {
            origins.push(format!("http://{}:{}", h, port));
            origins.push(format!("http://{}:{}", h, dev_port));
            origins.push(format!("http://{}", h));
        }

        // Allow LAN IPs when binding to all interfaces
        if is_all && let Ok(interfaces) = local_ip_address::list_afinet_netifas() {
            for (_, ip) in interfaces
                .iter()
                .filter(|(_, ip)| ip.is_ipv4() && !ip.is_loopback())
            {
                origins.push(format!("http://{}:{}", ip, port));
                origins.push(format!("http://{}:{}", ip, dev_port));
            }
        }

        for origin in extra {
            let origin = origin.trim().trim_end_matches('/');
            if !origin.is_empty() && !origins.iter().any(|o| o == origin) {
                origins.push(origin.to_string());
            }
        }

        Self { origins }
    }

    /// Check if an origin is allowed
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    fn as_header_values(&self) -> Vec<HeaderValue> {
        self.origins.iter().filter_map(|o| o.parse().ok()).collect()
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed.as_header_values()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: Request) -> impl IntoResponse {
    tracing::debug!(method = %req.method(), uri = %req.uri(), "[404]");
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_origins() {
        let allowed = AllowedOrigins::new("127.0.0.1", 4000, &[]);
        assert!(allowed.is_allowed("http://localhost:4000"));
        assert!(allowed.is_allowed("http://127.0.0.1:4000"));
        assert!(allowed.is_allowed("http://localhost:4001"));
        assert!(!allowed.is_allowed("http://evil.example:4000"));
    }

    #[test]
    fn test_specific_host() {
        let allowed = AllowedOrigins::new("10.0.0.5", 8080, &[]);
        assert!(allowed.is_allowed("http://10.0.0.5:8080"));
        assert!(!allowed.is_allowed("http://localhost:8080"));
    }

    #[test]
    fn test_extra_origins_are_normalized() {
        let extra = vec![
            "http://localhost:5173/".to_string(),
            "  ".to_string(),
            "http://localhost:4000".to_string(),
        ];
        let allowed = AllowedOrigins::new("localhost", 4000, &extra);
        assert!(allowed.is_allowed("http://localhost:5173"));
        assert_eq!(
            allowed
                .origins
                .iter()
                .filter(|o| *o == "http://localhost:4000")
                .count(),
            1
        );
    }
}
