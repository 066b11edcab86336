// Connection handling module
// Accepts a single TCP connection and serves it with hyper

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::api::ApiError;
use crate::config::AppState;
use crate::handler;
use crate::http;
use crate::logger;

/// Accept and process a connection, enforcing the connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment first, then check, so two accepts cannot both slip under the limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
    );
}

/// Serve one connection on its own task.
///
/// Request headers must arrive within `performance.header_read_timeout`, and
/// each request is answered within `performance.request_timeout` or gets a 503.
/// The counter is decremented when the connection ends.
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let request_timeout = Duration::from_secs(performance.request_timeout);

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .keep_alive(performance.keep_alive)
            .header_read_timeout(Duration::from_secs(performance.header_read_timeout));

        let service_state = Arc::clone(&state);
        let service = service_fn(move |req| {
            let state = Arc::clone(&service_state);
            async move {
                let request = handler::handle_request(req, Arc::clone(&state), peer_addr);
                match tokio::time::timeout(request_timeout, request).await {
                    Ok(response) => response,
                    Err(_) => {
                        logger::log_warning(&format!(
                            "Request from {peer_addr} exceeded {}s",
                            request_timeout.as_secs()
                        ));
                        let mut response = ApiError::Timeout.into_response();
                        http::apply_server_header(&mut response, &state.config.http.server_name);
                        Ok(response)
                    }
                }
            }
        });

        if let Err(err) = builder.serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
