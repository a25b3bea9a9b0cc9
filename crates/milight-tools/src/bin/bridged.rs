use clap::Parser;
use milight_bridge::Bridge;
use milight_core::{BridgeIdentity, MacAddr};
use milight_link::{netif, TtySink};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Parser, Debug)]
#[command(name = "milight-bridged")]
struct Args {
    /// Local address both UDP endpoints bind to. The wildcard default keeps
    /// broadcast discovery probes visible.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,
    /// UDP port for app registration and discovery.
    #[arg(long, default_value_t = 48899)]
    admin_port: u16,
    /// UDP port for lighting commands.
    #[arg(long, default_value_t = 8899)]
    command_port: u16,
    /// Interface whose IPv4 and hardware address go into discovery replies.
    #[arg(long, default_value = "eth0", conflicts_with_all = ["ip", "mac"])]
    interface: String,
    /// Report this IPv4 address instead of resolving --interface.
    #[arg(long, requires = "mac")]
    ip: Option<Ipv4Addr>,
    /// Report this hardware address instead of resolving --interface.
    #[arg(long, requires = "ip")]
    mac: Option<MacAddr>,
    /// Serial device connected to the RF transmitter.
    #[arg(long, default_value = "/dev/ttyAMA0")]
    serial: String,
    #[arg(long, default_value_t = 9600)]
    baud: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let identity = match (args.ip, args.mac) {
        (Some(ip), Some(mac)) => BridgeIdentity { ip, mac },
        _ => netif::resolve_identity(&args.interface)?,
    };
    log::info!("bridge identity: ip={} mac={}", identity.ip, identity.mac);

    let serial = TtySink::open(&args.serial, args.baud)?;
    let mut bridge = Bridge::bind(
        SocketAddr::new(args.bind, args.admin_port),
        SocketAddr::new(args.bind, args.command_port),
        serial,
        identity,
    )
    .await?;

    bridge
        .run(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::warn!("cannot listen for ctrl-c: {err}");
                std::future::pending::<()>().await;
            }
        })
        .await;
    Ok(())
}
