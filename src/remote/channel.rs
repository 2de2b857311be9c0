//! # Remote channel for outbound frames.
//!
//! [`Remote`] is a thin wrapper around an unbounded
//! [`tokio::sync::mpsc`] sender that provides non-blocking frame publishing
//! toward a single remote consumer (the display layer).
//!
//! ## Rules
//! - **Non-blocking publish**: `send()` never blocks and never suspends;
//!   the loop stays synchronous.
//! - **Single consumer**: one receiver owns the far end; buffers inside a
//!   frame are moved, never copied.
//! - **Fire-and-forget**: if the consumer went away, frames are dropped.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::error::EngineError;
use crate::remote::{Frame, Topic};

/// Sending half of the channel to the remote consumer.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); clones share
/// the same sequence counter, so frame ordering stays global to the
/// channel.
#[derive(Clone, Debug)]
pub struct Remote {
    tx: mpsc::UnboundedSender<Frame>,
    seq: Arc<AtomicU64>,
}

impl Remote {
    /// Creates a connected channel pair.
    ///
    /// The receiver is handed to whatever drives the display transport;
    /// the [`Remote`] goes to
    /// [`initialize`](crate::Reconciler::initialize).
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                seq: Arc::new(AtomicU64::new(0)),
            },
            rx,
        )
    }

    /// Sends a frame, stamping its sequence number.
    ///
    /// If the receiver has been dropped the frame is discarded; this
    /// function still returns immediately.
    pub fn send(&self, mut frame: Frame) {
        frame.seq = self.seq.fetch_add(1, AtomicOrdering::Relaxed);
        let _ = self.tx.send(frame);
    }

    /// Encodes `payload` and sends it as a frame on `topic`.
    ///
    /// Fails only if the payload cannot be encoded; delivery itself is
    /// fire-and-forget.
    pub fn publish<P: Serialize + ?Sized>(
        &self,
        topic: Topic,
        payload: &P,
        buffers: Vec<Vec<u8>>,
    ) -> Result<(), EngineError> {
        let payload = serde_json::to_value(payload).map_err(|e| EngineError::Codec {
            reason: e.to_string(),
        })?;
        self.send(Frame::new(topic, payload).with_buffers(buffers));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frames_arrive_in_order_with_seq() {
        let (remote, mut rx) = Remote::channel();
        remote.publish(Topic::Threads, &json!(["a"]), Vec::new()).unwrap();
        remote
            .publish(Topic::QueryResult, &json!({"rows": 0}), Vec::new())
            .unwrap();

        let first = rx.try_recv().expect("first frame");
        let second = rx.try_recv().expect("second frame");
        assert_eq!(first.seq, 0);
        assert_eq!(first.topic, Topic::Threads);
        assert_eq!(second.seq, 1);
        assert_eq!(second.topic, Topic::QueryResult);
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let (remote, mut rx) = Remote::channel();
        let other = remote.clone();
        remote.send(Frame::new(Topic::Threads, json!(null)));
        other.send(Frame::new(Topic::Threads, json!(null)));

        assert_eq!(rx.try_recv().expect("frame").seq, 0);
        assert_eq!(rx.try_recv().expect("frame").seq, 1);
    }

    #[test]
    fn test_send_after_receiver_drop_is_silent() {
        let (remote, rx) = Remote::channel();
        drop(rx);
        remote.send(Frame::new(Topic::Threads, json!(null)));
    }

    #[test]
    fn test_buffers_move_with_the_frame() {
        let (remote, mut rx) = Remote::channel();
        let buffer = vec![0u8; 64];
        remote
            .publish(Topic::TrackData, &json!({"track": 1}), vec![buffer])
            .unwrap();

        let frame = rx.try_recv().expect("frame");
        assert_eq!(frame.buffers.len(), 1);
        assert_eq!(frame.buffers[0].len(), 64);
    }
}
