use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    requests: mpsc::Receiver<Vec<u8>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    /// Waits for the raw bytes of the next request the server answered.
    ///
    /// # Errors
    ///
    /// Returns an error if no request arrives in time.
    pub fn next_request(&self) -> Result<String, String> {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .map(|raw| String::from_utf8_lossy(&raw).into_owned())
            .map_err(|err| format!("no request recorded: {}", err))
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn an HTTP server that answers every request with `status_line` and `body`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(
    status_line: &'static str,
    body: &'static str,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let (request_tx, request_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    if let Some(raw) = handle_client(stream, status_line, body) {
                        drop(request_tx.send(raw));
                    }
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/rpc", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            requests: request_rx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, status_line: &str, body: &str) -> Option<Vec<u8>> {
    stream.set_nonblocking(false).ok()?;
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok()?;
    let raw = read_request(&mut stream)?;
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()?;
    drop(stream.shutdown(Shutdown::Both));
    Some(raw)
}

fn read_request(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return Some(raw);
        }
        raw.extend_from_slice(chunk.get(..read)?);
        if let Some(head_end) = raw.windows(4).position(|window| window == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(raw.get(..head_end)?).into_owned();
            let body_len = content_length(&head);
            let total = head_end.checked_add(4)?.checked_add(body_len)?;
            while raw.len() < total {
                let more = stream.read(&mut chunk).ok()?;
                if more == 0 {
                    break;
                }
                raw.extend_from_slice(chunk.get(..more)?);
            }
            return Some(raw);
        }
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Run the `jrpc` binary with an isolated home directory and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_jrpc<I, S>(home: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_jrpc_with_env(home, args, &[])
}

/// Like [`run_jrpc`], with extra environment variables set for the child.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_jrpc_with_env<I, S>(
    home: &Path,
    args: I,
    envs: &[(&str, &str)],
) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = jrpc_bin()?;
    Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("RUST_LOG", "error")
        .env_remove("JRPC_LOG")
        .env_remove("JRPC_CONFIG")
        .env_remove("JRPC_TIMEOUT")
        .env_remove("JRPC_CONNECT_TIMEOUT")
        .env_remove("JRPC_VERBOSE")
        .envs(envs.iter().copied())
        .output()
        .map_err(|err| format!("run jrpc failed: {}", err))
}

fn jrpc_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_jrpc").map_or_else(
        || Err("CARGO_BIN_EXE_jrpc missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
