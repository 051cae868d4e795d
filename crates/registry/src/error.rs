use thiserror::Error;

/// Bridge misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
	/// A consumer was already attached; only one is allowed per bridge.
	#[error("a consumer is already attached to this bridge")]
	ConsumerAlreadyAttached,
}
