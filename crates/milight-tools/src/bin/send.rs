use clap::Parser;
use milight_tools::parse_hex_payload;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;

#[derive(Parser, Debug)]
#[command(name = "milight-send")]
struct Args {
    /// Bridge address.
    #[arg(long)]
    ip: IpAddr,
    #[arg(long, default_value_t = 8899)]
    port: u16,
    /// Command bytes as hex digits, e.g. "3100000000080400".
    payload: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let payload = parse_hex_payload(&args.payload)?;
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    let target = SocketAddr::new(args.ip, args.port);
    socket.send_to(&payload, target).await?;
    println!("sent {} byte(s) to {target}", payload.len());
    Ok(())
}
