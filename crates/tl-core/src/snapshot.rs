//! The opaque per-tick state snapshot.

/// Full simulation state at one tick: string keys mapping to arbitrarily
/// nested JSON values.
///
/// Nothing in the logging path looks inside it.  `serde_json`'s `Map`
/// preserves the producer's values exactly, so what is written is what the
/// engine handed over.
pub type Snapshot = serde_json::Map<String, serde_json::Value>;
