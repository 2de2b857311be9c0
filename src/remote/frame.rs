//! # Outbound frames delivered to the remote consumer.
//!
//! A [`Frame`] is one typed message handed to the display layer: a
//! [`Topic`], an encoded payload, and optionally a set of large buffers
//! whose ownership moves with the frame instead of being copied.
//!
//! ## Ordering guarantees
//! Each frame carries a sequence number (`seq`) assigned by the sending
//! [`Remote`](crate::remote::Remote), increasing monotonically per channel.
//! Consumers can use `seq` to re-establish order if their transport
//! re-buffers frames.

use serde_json::Value;

/// Classification of outbound frames.
///
/// A fixed enumerated set; the engine reserves [`Topic::StateUpdate`] for
/// the post-quiescence snapshot, all other topics are application payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The committed state snapshot after a reconciliation pass.
    StateUpdate,
    /// Computed overview data for the summary strip.
    OverviewData,
    /// Per-track payloads.
    TrackData,
    /// The process/thread listing.
    Threads,
    /// Results of an ad-hoc query.
    QueryResult,
    /// A converted legacy trace handed over for import.
    LegacyTrace,
}

impl Topic {
    /// Returns the stable wire label for this topic.
    ///
    /// # Example
    /// ```
    /// use statevisor::Topic;
    ///
    /// assert_eq!(Topic::StateUpdate.as_label(), "updateState");
    /// assert_eq!(Topic::TrackData.as_label(), "publishTrackData");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Topic::StateUpdate => "updateState",
            Topic::OverviewData => "publishOverviewData",
            Topic::TrackData => "publishTrackData",
            Topic::Threads => "publishThreads",
            Topic::QueryResult => "publishQueryResult",
            Topic::LegacyTrace => "publishLegacyTrace",
        }
    }
}

/// One outbound message.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Monotonically increasing per-channel sequence number.
    pub seq: u64,
    /// Frame classification.
    pub topic: Topic,
    /// Encoded payload.
    pub payload: Value,
    /// Large buffers transferred with the frame (ownership moves, no copy).
    pub buffers: Vec<Vec<u8>>,
}

impl Frame {
    /// Creates a frame with no buffers. `seq` is assigned on send.
    pub fn new(topic: Topic, payload: Value) -> Self {
        Self {
            seq: 0,
            topic,
            payload,
            buffers: Vec::new(),
        }
    }

    /// Attaches transferred buffers.
    #[inline]
    pub fn with_buffers(mut self, buffers: Vec<Vec<u8>>) -> Self {
        self.buffers = buffers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_are_stable() {
        let cases = [
            (Topic::StateUpdate, "updateState"),
            (Topic::OverviewData, "publishOverviewData"),
            (Topic::TrackData, "publishTrackData"),
            (Topic::Threads, "publishThreads"),
            (Topic::QueryResult, "publishQueryResult"),
            (Topic::LegacyTrace, "publishLegacyTrace"),
        ];
        for (topic, label) in cases {
            assert_eq!(topic.as_label(), label);
        }
    }
}
