use clap::Parser;
use milight_core::{DISCOVERY_MARKER, MAX_DATAGRAM_LEN};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;

#[derive(Parser, Debug)]
#[command(name = "milight-discover")]
struct Args {
    /// Address to probe; the default broadcasts to the local network.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::BROADCAST))]
    target: IpAddr,
    #[arg(long, default_value_t = 48899)]
    port: u16,
    /// How long to wait for replies after the probe.
    #[arg(long, default_value_t = 2)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.set_broadcast(true)?;
    socket
        .send_to(DISCOVERY_MARKER, SocketAddr::new(args.target, args.port))
        .await?;

    let window = Duration::from_secs(args.timeout_secs);
    let mut buf = [0u8; MAX_DATAGRAM_LEN];
    let mut found = 0usize;
    loop {
        match timeout(window, socket.recv_from(&mut buf)).await {
            Ok(Ok((n, src))) => {
                println!("{src}: {}", String::from_utf8_lossy(&buf[..n]));
                found += 1;
            }
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => break,
        }
    }
    if found == 0 {
        println!("No bridges found.");
    }
    Ok(())
}
