use crate::{LinkError, SerialSink};
use tokio::io::AsyncWriteExt;
use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};

/// Write side of the serial connection to the RF transmitter.
///
/// Opened once at startup and held for the process lifetime; the dispatch
/// loop is the single writer.
pub struct TtySink {
    stream: SerialStream,
}

impl TtySink {
    /// Opens `path` at `baud_rate`, 8 data bits, no parity, 1 stop bit, no
    /// flow control.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, LinkError> {
        let stream = tokio_serial::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .open_native_async()?;
        log::info!("serial device {path} open at {baud_rate} baud");
        Ok(Self { stream })
    }
}

impl SerialSink for TtySink {
    async fn write(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.stream.write_all(bytes).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
