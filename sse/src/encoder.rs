use async_stream::stream;
use bytes::Bytes;
use futures::{pin_mut, Stream, StreamExt};
use log::*;

use crate::error::Error;
use crate::serializer::Serializer;

/// Content type an SSE response declares, once, before any frame bytes.
pub const TEXT_EVENT_STREAM: &str = "text/event-stream";

const DATA_PREFIX: &[u8] = b"data: ";
const FRAME_TERMINATOR: &[u8] = b"\n\n";

/// Adapts a record producer into a lazy stream of SSE wire chunks.
///
/// Each record yields exactly three chunks in order: `"data: "`, the
/// serialized record, `"\n\n"`. The returned stream is a generator, so the
/// producer is polled for record k+1 only after the consumer has taken all
/// of record k's chunks; demand flows from sink to producer.
///
/// A producer failure or a serialization failure ends the stream with that
/// error as its final item. Serialization happens before any chunk of the
/// record is yielded, so a failing record never leaks a partial frame.
/// Dropping the stream drops the producer subscription.
pub fn encode<S, T, Ser>(records: S, serializer: Ser) -> impl Stream<Item = Result<Bytes, Error>>
where
    S: Stream<Item = Result<T, Error>>,
    Ser: Serializer<T>,
{
    stream! {
        pin_mut!(records);

        let mut frames = 0usize;
        while let Some(next) = records.next().await {
            let record = match next {
                Ok(record) => record,
                Err(e) => {
                    error!("Record producer failed after {frames} frames: {e}");
                    yield Err(e);
                    return;
                }
            };

            let body = match serializer.serialize(&record) {
                Ok(body) => body,
                Err(e) => {
                    error!("Dropping event stream, record failed to serialize: {e}");
                    yield Err(e);
                    return;
                }
            };

            yield Ok(Bytes::from_static(DATA_PREFIX));
            yield Ok(body);
            yield Ok(Bytes::from_static(FRAME_TERMINATOR));
            frames += 1;
        }

        debug!("Event stream complete after {frames} frames");
    }
}
