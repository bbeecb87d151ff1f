use eyre::Result;
use rawfetch_lib::cli::{Command, FetchParams, ResolvedCommand, resolve_command};
use rawfetch_lib::manifest::{ImageEntry, Manifest};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Canned response for one request path.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    /// Held before any response bytes are written
    pub delay: Option<Duration>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Minimal HTTP/1.1 server answering GETs from a fixed route table; unknown
/// paths get 404. Runs in background threads until the process exits.
pub struct TestServer {
    base_url: String,
}

impl TestServer {
    pub fn start(routes: HashMap<String, Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let port = listener.local_addr().expect("local addr").port();
        let routes = Arc::new(routes);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                thread::spawn(move || handle(stream, &routes));
            }
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let route = routes
        .get(path.trim_start_matches('/'))
        .cloned()
        .unwrap_or_else(|| Route::status(404));
    tracing::debug!(path, status = route.status, delay = ?route.delay, "Serving");
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }
    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        route.status,
        reason,
        route.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

/// URL on a port nothing listens on, for simulating transport failures.
pub fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/{path}")
}

/// Deterministic binary payload of `len` bytes.
pub fn image_bytes(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect()
}

pub fn manifest(images: Vec<(String, &str)>) -> Manifest {
    Manifest {
        username: "octocat".to_string(),
        repo: "assets".to_string(),
        branch: "main".to_string(),
        images: images
            .into_iter()
            .map(|(url, name)| ImageEntry {
                github_raw_url: url,
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<std::path::PathBuf> {
    let path = dir.join("data.json");
    std::fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

/// Resolves a fetch exactly as the binary would for `rawfetch <manifest> <output_dir>`.
pub fn build_fetch_params(manifest_path: &Path, output_dir: &Path) -> Result<FetchParams> {
    let command = Command::Fetch {
        manifest_path: Some(manifest_path.to_string_lossy().into_owned()),
        output_dir: Some(output_dir.to_string_lossy().into_owned()),
        config_path: None,
        timeout_secs: Some(5),
    };
    match resolve_command(command)? {
        ResolvedCommand::Fetch(params) => Ok(params),
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("rawfetch_lib=debug,rawfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
