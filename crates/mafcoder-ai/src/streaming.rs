//! Server-Sent Events (SSE) streaming parser.
//!
//! The Responses API streams `event:` / `data:` pairs separated by blank
//! lines. This module turns a reqwest byte stream (or any buffered reader)
//! into `SseEvent`s delivered in arrival order.

use futures_util::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    /// The event type (e.g., "response.output_text.delta").
    pub event: Option<String>,
    /// The event data (JSON string).
    pub data: String,
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
    parse_sse_reader(reader, on_event).await
}

/// Parse SSE events from any buffered async reader.
pub async fn parse_sse_reader<R>(
    reader: R,
    mut on_event: impl FnMut(SseEvent),
) -> Result<(), crate::AiError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    let mut current_event: Option<String> = None;
    let mut current_data = String::new();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| crate::AiError::NetworkError(e.to_string()))?
    {
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            // Empty line = end of event
            if !current_data.is_empty() {
                on_event(SseEvent {
                    event: current_event.take(),
                    data: std::mem::take(&mut current_data),
                });
            }
            current_event = None;
            continue;
        }

        if let Some(event_type) = field_value(line, "event") {
            current_event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !current_data.is_empty() {
                current_data.push('\n');
            }
            current_data.push_str(data);
        }
        // Ignore other fields (id:, retry:, comments)
    }

    // Flush any remaining event
    if !current_data.is_empty() {
        on_event(SseEvent {
            event: current_event,
            data: current_data,
        });
    }

    Ok(())
}

/// `name: value` or `name:value`, per the SSE field grammar.
fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &str) -> Vec<SseEvent> {
        let mut events = Vec::new();
        parse_sse_reader(input.as_bytes(), |e| events.push(e))
            .await
            .unwrap();
        events
    }

    #[tokio::test]
    async fn parses_named_events_in_order() {
        let events = collect(
            "event: response.created\ndata: {\"a\":1}\n\nevent: response.output_text.delta\ndata: {\"delta\":\"Hi\"}\n\n",
        )
        .await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event.as_deref(), Some("response.created"));
        assert_eq!(events[1].event.as_deref(), Some("response.output_text.delta"));
        assert_eq!(events[1].data, "{\"delta\":\"Hi\"}");
    }

    #[tokio::test]
    async fn joins_multi_line_data() {
        let events = collect("data: first\ndata: second\n\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, None);
        assert_eq!(events[0].data, "first\nsecond");
    }

    #[tokio::test]
    async fn handles_crlf_and_missing_space() {
        let events = collect("event:ping\r\ndata:{}\r\n\r\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event.as_deref(), Some("ping"));
        assert_eq!(events[0].data, "{}");
    }

    #[tokio::test]
    async fn flushes_trailing_event_without_blank_line() {
        let events = collect(": comment\nid: 7\nevent: done\ndata: bye").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event.as_deref(), Some("done"));
        assert_eq!(events[0].data, "bye");
    }

    #[tokio::test]
    async fn event_without_data_is_dropped() {
        let events = collect("event: lonely\n\ndata: x\n\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, None);
    }
}
