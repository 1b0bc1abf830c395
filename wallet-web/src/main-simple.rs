//! Static file server for the wallet web app
//!
//! Serves the built WASM app from `WALLET_WEB_DIST` (default `dist/`) on
//! `WALLET_WEB_ADDR` (default `127.0.0.1:8080`). Unknown paths fall back to
//! `index.html` so client-side routes like `/transactions` survive a reload.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

use lib_utils::envs::get_env_or;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";
const NOT_FOUND_BODY: &[u8] = b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";

fn main() {
    let addr = get_env_or("WALLET_WEB_ADDR", DEFAULT_ADDR);
    let dist = PathBuf::from(get_env_or("WALLET_WEB_DIST", DEFAULT_DIST));

    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Wallet app running at http://{}", addr);
    println!("Serving from {}/", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve(dist, target);

    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", content_type_for(&file_path), contents),
        Err(_) => {
            eprintln!("Not found: {}", file_path.display());
            ("404 NOT FOUND", "text/html; charset=utf-8", NOT_FOUND_BODY.to_vec())
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request target to a file under `dist`, falling back to the SPA
/// entry point for directories, missing files and anything escaping `dist`.
fn resolve(dist: &Path, target: &str) -> PathBuf {
    let path = target.split(['?', '#']).next().unwrap_or("/");
    let relative = Path::new(path.trim_start_matches('/'));
    let index = dist.join("index.html");

    if relative.as_os_str().is_empty() || relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return index;
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
