//! Startup banner and URL display

use super::config::is_all_interfaces;
use super::constants::APP_NAME;
use crate::utils::terminal::terminal_link;

// Label width for alignment
const W: usize = 10;

/// Print the startup banner with URLs
pub fn print_banner(
    host: &str,
    port: u16,
    cors_origins: &[String],
    data_dir: &str,
    employees: u64,
) {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();

    let api_url = format!("http://{}:{}/api/employees", display_host, port);
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}",
        "API:",
        terminal_link(&api_url)
    );

    let docs_url = format!("http://{}:{}/api/openapi.json", display_host, port);
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}",
        "OpenAPI:",
        terminal_link(&docs_url)
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    } else if is_all_interfaces(host) {
        if let Ok(interfaces) = local_ip_address::list_afinet_netifas() {
            for (_, ip) in interfaces
                .iter()
                .filter(|(_, ip)| ip.is_ipv4() && !ip.is_loopback())
            {
                let network_url = format!("http://{}:{}", ip, port);
                println!(
                    "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}",
                    "Network:",
                    terminal_link(&network_url)
                );
            }
        }
    } else {
        let network_url = format!("http://{}:{}", host, port);
        println!(
            "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}",
            "Network:",
            terminal_link(&network_url)
        );
    }

    println!(
        "  \x1b[90m➜  {:<W$} {}\x1b[0m",
        "CORS:",
        cors_summary(port, cors_origins)
    );
    println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Data:", data_dir);
    if employees == 0 {
        println!(
            "  \x1b[90m➜  {:<W$} empty, POST /api/seed or run `staffdir seed`\x1b[0m",
            "Employees:"
        );
    } else {
        println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Employees:", employees);
    }

    println!();
}

/// Cross-origin access beyond the server's own host, ports `port` and `port + 1`
fn cors_summary(port: u16, cors_origins: &[String]) -> String {
    if cors_origins.is_empty() {
        format!(
            "ports {} and {} only, set server.cors_origins for other UIs",
            port,
            port.saturating_add(1)
        )
    } else {
        cors_origins.join(", ")
    }
}
