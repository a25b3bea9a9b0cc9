use std::future::Future;
use thiserror::Error;

/// Errors from the bridge's transports and identity lookup.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serial error: {0}")]
    Serial(#[from] tokio_serial::Error),
    #[error("interface {0} not found")]
    InterfaceNotFound(String),
    #[error("interface {0} has no IPv4 address")]
    NoIpv4Address(String),
    #[error("interface {0} has no usable hardware address")]
    NoHardwareAddress(String),
}

/// Async sink for raw command bytes headed to the RF transmitter.
///
/// Implementors must write the bytes in order with no framing added. The
/// dispatch loop is the only caller and calls sequentially, one datagram at
/// a time, so writes never interleave on the wire.
pub trait SerialSink: Send {
    /// Writes `bytes` to the transport verbatim.
    ///
    /// Spelled as the desugared form so the returned future is `Send` and
    /// a bridge generic over the sink can run inside a spawned task.
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), LinkError>> + Send;
}
