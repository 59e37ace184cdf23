// # ibxcli - Infoblox action dispatcher CLI
//
// One-shot integration layer over `ibx-core`: load one invocation request,
// dispatch exactly one action against the appliance, print the outcome
// record as JSON on stdout, exit. All dispatch logic lives in `ibx-core`;
// all WAPI transport lives in `ibx-client-wapi`.
//
// ## Usage
//
// ```bash
// # request from a file
// ibxcli request.json
//
// # request from stdin
// echo '{"server": "gm.example.com", "username": "admin",
//        "password": "...", "action": "get_network",
//        "network": "10.0.0.0/24"}' | ibxcli
// ```
//
// ## Configuration
//
// Ambient knobs are environment variables; everything operation-specific
// is in the request document:
//
// - `IBX_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
// - `IBX_TLS_NO_VERIFY`: accept self-signed appliance certificates
//   (1/true/yes)
//
// Logs go to stderr so stdout stays machine-readable.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use ibx_core::request::InvocationRequest;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: action dispatched (including "not found" outcomes)
/// - 1: invalid request or configuration
/// - 2: runtime error (client failure, appliance error)
#[derive(Debug, Clone, Copy)]
enum DispatchExitCode {
    /// Action dispatched and outcome emitted
    Success = 0,
    /// Configuration or request error
    ConfigError = 1,
    /// Runtime error (client or appliance failure)
    RuntimeError = 2,
}

impl From<DispatchExitCode> for ExitCode {
    fn from(code: DispatchExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Fixed diagnostic for a build that cannot reach an appliance at all
#[allow(dead_code)]
const MISSING_CLIENT_MSG: &str = "ibxcli was built without the Infoblox WAPI client. \
    Rebuild with the 'wapi' feature enabled: cargo build --features wapi";

/// Ambient CLI configuration
struct CliConfig {
    /// Request file path; `-` or absent means stdin
    request_path: Option<String>,
    log_level: String,
    tls_no_verify: bool,
}

impl CliConfig {
    /// Load configuration from the command line and environment
    fn from_env() -> Self {
        Self {
            request_path: env::args().nth(1),
            log_level: env::var("IBX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            tls_no_verify: env::var("IBX_TLS_NO_VERIFY")
                .map(|v| env_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "IBX_LOG_LEVEL '{}' is not valid. Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }
}

fn env_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Read the invocation request from a file or stdin
fn load_request(path: Option<&str>) -> Result<InvocationRequest> {
    let text = match path {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file: {path}"))?,
    };

    serde_json::from_str(&text).context("failed to parse invocation request")
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return DispatchExitCode::ConfigError.into();
    }

    // Initialize tracing on stderr; stdout carries only the outcome record
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return DispatchExitCode::ConfigError.into();
    }

    // The appliance client is compiled in via the `wapi` feature. Without
    // it there is nothing to dispatch against, so fail before touching the
    // request document.
    #[cfg(not(feature = "wapi"))]
    {
        eprintln!("{MISSING_CLIENT_MSG}");
        DispatchExitCode::ConfigError.into()
    }

    #[cfg(feature = "wapi")]
    {
        run_cli(&config)
    }
}

/// Load the request, dispatch it, emit the outcome
#[cfg(feature = "wapi")]
fn run_cli(config: &CliConfig) -> ExitCode {
    use ibx_client_wapi::{WapiConfig, WapiHttpClient};

    let request = match load_request(config.request_path.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Request error: {e:#}");
            return DispatchExitCode::ConfigError.into();
        }
    };

    info!(action = %request.action, server = %request.server, "dispatching");

    // One blocking round trip; a single-threaded runtime is enough
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            return DispatchExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        let wapi_config = WapiConfig::from_request(&request)
            .with_accept_invalid_certs(config.tls_no_verify);
        let client = WapiHttpClient::new(wapi_config)?;
        ibx_core::dispatch(&client, &request).await
    });

    match result {
        Ok(outcome) => match serde_json::to_string(&outcome) {
            Ok(rendered) => {
                println!("{rendered}");
                DispatchExitCode::Success.into()
            }
            Err(e) => {
                error!("failed to render outcome: {e}");
                DispatchExitCode::RuntimeError.into()
            }
        },
        Err(e @ (ibx_core::Error::InvalidInput(_) | ibx_core::Error::Config(_))) => {
            eprintln!("Invalid request: {e}");
            DispatchExitCode::ConfigError.into()
        }
        Err(e) => {
            error!("dispatch failed: {e}");
            eprintln!("Error: {e}");
            DispatchExitCode::RuntimeError.into()
        }
    }
}
