//! Server-Sent Events (SSE) streaming parser.
//!
//! Gemini's `streamGenerateContent?alt=sse` answers with one JSON document
//! per SSE event. [`SseParser`] handles the line protocol,
//! [`read_sse_events`] drives it over any buffered reader and
//! [`parse_sse_stream`] feeds it from a reqwest response body.

use futures_util::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;

/// A single SSE event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The `event:` field, if any.
    pub event: Option<String>,
    /// All `data:` lines of the event joined with `\n`.
    pub data: String,
}

/// Incremental, line-at-a-time SSE parser.
#[derive(Debug, Default)]
pub struct SseParser {
    current_event: Option<String>,
    current_data: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator). Returns an event when the
    /// line is the blank line that ends it.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            let event = self.current_event.take();
            if self.current_data.is_empty() {
                return None;
            }
            return Some(SseEvent {
                event,
                data: std::mem::take(&mut self.current_data),
            });
        }

        if let Some(event_type) = field_value(line, "event") {
            self.current_event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !self.current_data.is_empty() {
                self.current_data.push('\n');
            }
            self.current_data.push_str(data);
        }
        // id:, retry: and `:` comments are ignored.
        None
    }

    /// Flush an event left open when the stream ended without a blank line.
    pub fn finish(self) -> Option<SseEvent> {
        if self.current_data.is_empty() {
            None
        } else {
            Some(SseEvent {
                event: self.current_event,
                data: self.current_data,
            })
        }
    }
}

/// Value of `name: value` (one optional space after the colon).
fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Parse an SSE stream from a reqwest response, calling `on_event` for each event.
pub async fn parse_sse_stream(
    response: reqwest::Response,
    on_event: impl FnMut(SseEvent),
) -> Result<(), crate::AiError> {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let reader = tokio::io::BufReader::new(StreamReader::new(byte_stream));
    read_sse_events(reader, on_event).await
}

/// Read SSE events line by line until EOF, flushing a trailing open event.
pub async fn read_sse_events<R: AsyncBufRead + Unpin>(
    reader: R,
    mut on_event: impl FnMut(SseEvent),
) -> Result<(), crate::AiError> {
    let mut lines = reader.lines();
    let mut parser = SseParser::new();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| crate::AiError::NetworkError(e.to_string()))?
    {
        if let Some(event) = parser.push_line(&line) {
            on_event(event);
        }
    }

    if let Some(event) = parser.finish() {
        on_event(event);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(input: &str) -> Vec<SseEvent> {
        let mut parser = SseParser::new();
        let mut events: Vec<SseEvent> = input.lines().filter_map(|l| parser.push_line(l)).collect();
        events.extend(parser.finish());
        events
    }

    #[test]
    fn single_data_event() {
        let events = parse_all("data: {\"a\":1}\n\n");
        assert_eq!(
            events,
            vec![SseEvent {
                event: None,
                data: "{\"a\":1}".into()
            }]
        );
    }

    #[test]
    fn multi_line_data_is_joined() {
        let events = parse_all("data: one\ndata: two\n\n");
        assert_eq!(events[0].data, "one\ntwo");
    }

    #[test]
    fn event_type_is_kept_and_reset() {
        let events = parse_all("event: delta\ndata: x\n\ndata: y\n\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event.as_deref(), Some("delta"));
        assert_eq!(events[1].event, None);
    }

    #[test]
    fn crlf_and_no_space_after_colon() {
        let events = parse_all("data:{\"b\":2}\r\n\r\n");
        assert_eq!(events[0].data, "{\"b\":2}");
    }

    #[test]
    fn comments_and_unknown_fields_are_ignored() {
        let events = parse_all(": keepalive\nid: 7\nretry: 100\ndata: z\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "z");
    }

    #[test]
    fn blank_lines_without_data_emit_nothing() {
        assert!(parse_all("\n\n\n").is_empty());
    }

    #[test]
    fn trailing_event_without_blank_line_is_flushed() {
        let events = parse_all("data: a\n\ndata: tail");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].data, "tail");
    }

    #[tokio::test]
    async fn reader_yields_every_event_in_order() {
        let body = "data: one\n\n: ping\n\ndata: two\r\n\r\ndata: tail";
        let mut events = Vec::new();
        read_sse_events(body.as_bytes(), |e| events.push(e.data)).await.unwrap();
        assert_eq!(events, ["one", "two", "tail"]);
    }

    #[test]
    fn field_prefix_must_match_whole_name() {
        let events = parse_all("database: nope\n\n");
        assert!(events.is_empty());
    }
}
