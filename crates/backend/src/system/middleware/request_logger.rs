use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Thousands-grouped byte count, "12,345"
fn format_size(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Logs method, path, status, response size and latency of every request.
///
/// The body is buffered to measure its real size; responses here are small
/// JSON documents or static assets.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                %method,
                %path,
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "failed to read response body: {}",
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(%method, %path, status = parts.status.as_u16(), %size, elapsed_ms);
    } else {
        tracing::warn!(%method, %path, status = parts.status.as_u16(), %size, elapsed_ms);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1,000");
        assert_eq!(format_size(1234567), "1,234,567");
    }
}
