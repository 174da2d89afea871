//! Serve command - MCP server modes (stdio, HTTP).

use crate::config::Settings;
use crate::io::ExitCode;

/// Arguments for the serve command.
pub struct ServeArgs {
    pub http: bool,
    pub bind: Option<String>,
}

/// Run the serve command.
pub async fn run(args: ServeArgs, config: Settings) -> ExitCode {
    if args.http {
        // CLI flag wins over server.bind
        let bind_address = args.bind.unwrap_or_else(|| config.server.bind.clone());
        return run_http_server(config, bind_address).await;
    }

    eprintln!("Starting MCP server on stdio transport");
    eprintln!("To test: npx @modelcontextprotocol/inspector iconkit serve");

    match crate::mcp::serve_stdio(&config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("MCP server error: {e}");
            ExitCode::GeneralError
        }
    }
}

#[cfg(feature = "http-server")]
async fn run_http_server(config: Settings, bind_address: String) -> ExitCode {
    eprintln!("Starting HTTP server");
    eprintln!("Bind address: {bind_address}");

    match crate::http::serve_http(config, bind_address).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("HTTP server error: {e}");
            ExitCode::GeneralError
        }
    }
}

#[cfg(not(feature = "http-server"))]
async fn run_http_server(_config: Settings, _bind_address: String) -> ExitCode {
    eprintln!("HTTP server support is not compiled in.");
    eprintln!("Please rebuild with: cargo build --features http-server");
    ExitCode::GeneralError
}
