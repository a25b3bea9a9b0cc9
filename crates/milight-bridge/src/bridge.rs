use milight_core::{admin_reply, BridgeIdentity, MAX_DATAGRAM_LEN};
use milight_link::{LinkError, SerialSink, UdpEndpoint};
use std::future::Future;
use std::net::SocketAddr;

/// The running bridge: the two bound UDP endpoints, the serial sink, and
/// the identity reported to discovery probes.
///
/// Constructed once at startup; nothing here is rebound or replaced while
/// the dispatch loop runs.
pub struct Bridge<S: SerialSink> {
    admin: UdpEndpoint,
    command: UdpEndpoint,
    serial: S,
    identity: BridgeIdentity,
}

impl<S: SerialSink> Bridge<S> {
    /// Binds both endpoints. Either bind failing is fatal; the bridge must
    /// not serve with an unusable socket.
    pub async fn bind(
        admin_addr: SocketAddr,
        command_addr: SocketAddr,
        serial: S,
        identity: BridgeIdentity,
    ) -> Result<Self, LinkError> {
        let admin = UdpEndpoint::bind(admin_addr).await?;
        let command = UdpEndpoint::bind(command_addr).await?;
        log::info!("admin endpoint listening on {}", admin.local_addr()?);
        log::info!("command endpoint listening on {}", command.local_addr()?);
        Ok(Self {
            admin,
            command,
            serial,
            identity,
        })
    }

    pub fn admin_addr(&self) -> Result<SocketAddr, LinkError> {
        self.admin.local_addr()
    }

    pub fn command_addr(&self) -> Result<SocketAddr, LinkError> {
        self.command.local_addr()
    }

    /// Services both endpoints until `shutdown` resolves.
    ///
    /// Each iteration blocks until one of the sockets is readable, reads one
    /// datagram of up to [`MAX_DATAGRAM_LEN`] bytes from it, and hands it to
    /// the matching handler. Empty datagrams are skipped. No ordering is
    /// promised between the two sockets when both are ready; readiness is
    /// re-checked every iteration, so neither can be starved while the other
    /// has traffic. A failure handling one datagram is logged and the loop
    /// moves on.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let Self {
            admin,
            command,
            serial,
            identity,
        } = self;
        tokio::pin!(shutdown);
        let mut admin_buf = [0u8; MAX_DATAGRAM_LEN];
        let mut command_buf = [0u8; MAX_DATAGRAM_LEN];

        log::info!("bridge accepting commands");
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    log::info!("shutdown requested, stopping dispatch loop");
                    return;
                }
                received = admin.recv(&mut admin_buf) => match received {
                    Ok((0, src)) => log::trace!("empty admin datagram from {src} ignored"),
                    Ok((n, src)) => {
                        if let Err(err) = respond_admin(admin, identity, &admin_buf[..n], src).await {
                            log::warn!("admin reply to {src} failed: {err}");
                        }
                    }
                    Err(err) => log::warn!("admin receive failed: {err}"),
                },
                received = command.recv(&mut command_buf) => match received {
                    Ok((0, src)) => log::trace!("empty command datagram from {src} ignored"),
                    Ok((n, _)) => {
                        if let Err(err) = forward_command(serial, &command_buf[..n]).await {
                            log::warn!("serial forward failed: {err}");
                        }
                    }
                    Err(err) => log::warn!("command receive failed: {err}"),
                },
            }
        }
    }
}

/// Answers one admin datagram with the two-case discovery reply, back to
/// the sender via the admin endpoint.
async fn respond_admin(
    endpoint: &UdpEndpoint,
    identity: &BridgeIdentity,
    payload: &[u8],
    src: SocketAddr,
) -> Result<(), LinkError> {
    let reply = admin_reply(payload, identity);
    log::debug!(
        "admin datagram from {src}: {payload:02x?}, replying {:?}",
        String::from_utf8_lossy(&reply)
    );
    endpoint.send_to(&reply, src).await
}

/// Writes one command datagram to the serial sink, verbatim. Commands are
/// fire-and-forget: a failed write drops the datagram without retry, since
/// re-issuing a physical lighting action has ambiguous intent.
async fn forward_command<S: SerialSink>(serial: &mut S, payload: &[u8]) -> Result<(), LinkError> {
    log::debug!("command datagram: {payload:02x?}");
    serial.write(payload).await
}
