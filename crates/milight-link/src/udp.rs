use crate::LinkError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// One of the bridge's two UDP listening endpoints.
///
/// Bound once at startup and never rebound. Broadcast reception is enabled
/// so a wildcard bind also sees the app's broadcast discovery probes.
#[derive(Debug)]
pub struct UdpEndpoint {
    socket: UdpSocket,
}

impl UdpEndpoint {
    pub async fn bind(addr: SocketAddr) -> Result<Self, LinkError> {
        let socket = UdpSocket::bind(addr).await?;
        socket.set_broadcast(true)?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, LinkError> {
        self.socket.local_addr().map_err(LinkError::Io)
    }

    /// Receives one datagram into `buf`, returning `(len, sender)`. A
    /// datagram longer than `buf` is silently truncated to `buf.len()`.
    pub async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), LinkError> {
        Ok(self.socket.recv_from(buf).await?)
    }

    pub async fn send_to(&self, payload: &[u8], target: SocketAddr) -> Result<(), LinkError> {
        self.socket.send_to(payload, target).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UdpEndpoint;
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use tokio::net::UdpSocket;

    fn loopback() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn recv_returns_payload_and_sender() {
        let endpoint = UdpEndpoint::bind(loopback()).await.unwrap();
        let target = endpoint.local_addr().unwrap();
        let sender = UdpSocket::bind(loopback()).await.unwrap();

        sender.send_to(b"hello", target).await.unwrap();

        let mut buf = [0u8; 64];
        let (n, src) = endpoint.recv(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"hello");
        assert_eq!(src, sender.local_addr().unwrap());
    }

    #[tokio::test]
    async fn oversized_datagram_is_truncated_to_buffer() {
        let endpoint = UdpEndpoint::bind(loopback()).await.unwrap();
        let target = endpoint.local_addr().unwrap();
        let sender = UdpSocket::bind(loopback()).await.unwrap();

        sender.send_to(&[0x42u8; 100], target).await.unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = endpoint.recv(&mut buf).await.unwrap();
        assert_eq!(n, 64);
        assert_eq!(buf, [0x42u8; 64]);
    }

    #[tokio::test]
    async fn send_to_reaches_target() {
        let endpoint = UdpEndpoint::bind(loopback()).await.unwrap();
        let receiver = UdpSocket::bind(loopback()).await.unwrap();

        endpoint
            .send_to(b"+ok", receiver.local_addr().unwrap())
            .await
            .unwrap();

        let mut buf = [0u8; 16];
        let (n, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"+ok");
    }
}
