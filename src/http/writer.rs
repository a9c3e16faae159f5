use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

pub fn serialize_response(resp: &Response) -> Bytes {
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    let header = format!("Content-Type: {}\r\n", resp.content_type);

    let mut buf = BytesMut::with_capacity(status_line.len() + header.len() + 2 + resp.body.len());

    buf.put_slice(status_line.as_bytes());
    buf.put_slice(header.as_bytes());

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    pub async fn write_to_stream<S>(&self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        stream.write_all(&self.buffer).await?;
        stream.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_header_and_body() {
        let resp = Response::ok("text/css", b"a{}".to_vec());

        assert_eq!(
            &serialize_response(&resp)[..],
            b"HTTP/1.1 200 OK\r\nContent-Type: text/css\r\n\r\na{}"
        );
    }
}
