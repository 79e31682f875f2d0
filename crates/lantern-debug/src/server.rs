//! HTTP debug server implementation.

use crate::DebugState;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Debug, thiserror::Error)]
pub enum DebugServerError {
    #[error("Failed to bind to port {port}: {error}")]
    BindError { port: u16, error: String },
    #[error("Server thread panicked")]
    ThreadPanic,
}

/// HTTP server for the debug API.
/// Runs on a background thread to avoid blocking the frame loop.
pub struct DebugServer {
    port: u16,
    actual_port: Option<u16>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Serialize, Deserialize)]
struct Command {
    command: String,
}

#[derive(Serialize)]
struct CommandResponse {
    executed: bool,
    command: String,
}

#[derive(Serialize)]
struct LampResponse {
    toggled: bool,
    /// Lamp state the toggle will move toward.
    requested_state: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    uptime_seconds: f64,
}

impl DebugServer {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            actual_port: None,
            handle: None,
        }
    }

    pub fn start(&mut self, state: Arc<Mutex<DebugState>>) -> Result<(), DebugServerError> {
        let server = Server::http(format!("127.0.0.1:{}", self.port)).map_err(|e| {
            DebugServerError::BindError {
                port: self.port,
                error: e.to_string(),
            }
        })?;

        let actual_port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(self.port);
        self.actual_port = Some(actual_port);

        let handle = thread::spawn(move || {
            Self::run_server(server, state);
        });

        self.handle = Some(handle);
        Ok(())
    }

    pub fn stop(&mut self) {
        // tiny_http doesn't support graceful shutdown, so we just detach the thread.
        // The thread will terminate when the server is dropped or the process ends.
        if let Some(handle) = self.handle.take() {
            // Don't wait for the thread to join as it may be blocked in incoming_requests()
            std::mem::forget(handle);
        }
    }

    pub fn actual_port(&self) -> u16 {
        self.actual_port.unwrap_or(self.port)
    }

    fn run_server(server: Server, state: Arc<Mutex<DebugState>>) {
        for request in server.incoming_requests() {
            if let Err(e) = Self::handle_request(request, &state) {
                eprintln!("Debug server error: {}", e);
            }
        }
    }

    fn handle_request(
        mut request: Request,
        state: &Arc<Mutex<DebugState>>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let response = match (request.method(), request.url()) {
            (&Method::Get, "/health") => {
                let debug_state = state.lock().unwrap();
                let response = HealthResponse {
                    status: "ok".to_string(),
                    uptime_seconds: debug_state.uptime_seconds,
                };
                Self::json_response(&serde_json::to_string(&response)?)
            }
            (&Method::Get, "/state") => {
                let debug_state = state.lock().unwrap();
                Self::json_response(&serde_json::to_string(&*debug_state)?)
            }
            (&Method::Get, "/lights") => {
                let debug_state = state.lock().unwrap();
                Self::json_response(&serde_json::to_string(&debug_state.lights)?)
            }
            (&Method::Post, "/lamp") => {
                let requested_state = {
                    let mut debug_state = state.lock().unwrap();
                    debug_state.lamp_toggle_requested = true;
                    !debug_state.lamp_requested
                };
                let response = LampResponse {
                    toggled: true,
                    requested_state,
                };
                Self::json_response(&serde_json::to_string(&response)?)
            }
            (&Method::Post, "/command") => {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body)?;
                let command: Command = serde_json::from_str(&body)?;

                let executed = match command.command.as_str() {
                    "quit" => {
                        if let Ok(mut debug_state) = state.lock() {
                            debug_state.quit_requested = true;
                        }
                        true
                    }
                    _ => false,
                };

                let response = CommandResponse {
                    executed,
                    command: command.command,
                };
                Self::json_response(&serde_json::to_string(&response)?)
            }
            _ => Response::from_string("Not Found").with_status_code(404),
        };

        request.respond(response)?;
        Ok(())
    }

    fn json_response(json: &str) -> Response<std::io::Cursor<Vec<u8>>> {
        Response::from_string(json).with_header(
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
    }
}

impl Drop for DebugServer {
    fn drop(&mut self) {
        self.stop();
    }
}
