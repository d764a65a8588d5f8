//! Local network report.
//!
//! Printed before a run so the output file shows which interfaces and which
//! nameservers the diagnostics ran from.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use if_addrs::{IfAddr, Interface};
use log::warn;

use crate::report::{dns_servers_line, OutputSink};

/// One address of a local interface, in CIDR form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub ip: IpAddr,
    pub prefix_len: u32,
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_len)
    }
}

impl From<&Interface> for InterfaceAddress {
    fn from(iface: &Interface) -> Self {
        let (ip, prefix_len) = match &iface.addr {
            IfAddr::V4(v4) => (IpAddr::V4(v4.ip), u32::from(v4.netmask).count_ones()),
            IfAddr::V6(v6) => (IpAddr::V6(v6.ip), u128::from(v6.netmask).count_ones()),
        };
        Self {
            interface: iface.name.clone(),
            ip,
            prefix_len,
        }
    }
}

/// Loopback interfaces and links that are not up are left out.
fn is_reportable(iface: &Interface) -> bool {
    iface.is_oper_up()
        && !iface.is_loopback()
        && !iface.name.to_lowercase().contains("loopback")
}

/// Addresses of the interfaces that are up, excluding loopback.
pub fn interface_addresses() -> Vec<InterfaceAddress> {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces
            .iter()
            .filter(|iface| is_reportable(iface))
            .map(InterfaceAddress::from)
            .collect(),
        Err(e) => {
            warn!("Could not list network interfaces: {e}");
            Vec::new()
        }
    }
}

/// One `Interface:` block per interface, in first-seen order, each followed
/// by its addresses and a blank line.
pub fn render_interfaces(addresses: &[InterfaceAddress]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for address in addresses {
        if !names.contains(&address.interface.as_str()) {
            names.push(&address.interface);
        }
    }

    let mut out = String::new();
    for name in names {
        out.push_str(&format!("Interface: {name}\n"));
        for address in addresses.iter().filter(|a| a.interface == name) {
            out.push_str(&format!("IP Address: {address}\n"));
        }
        out.push('\n');
    }
    out
}

/// Writes the local interfaces and the system nameservers to `sink`.
pub fn print_network_info(sink: &mut OutputSink, nameservers: &[SocketAddr]) {
    sink.write(&render_interfaces(&interface_addresses()));
    sink.write(&dns_servers_line(nameservers));
}
