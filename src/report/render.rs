//! Text rendering of resolver reports.

use std::fmt::Write as _;
use std::net::SocketAddr;

use crate::dns::Resolver;
use crate::lookup::{LookupAttempt, ResolverReport, ResolverVerdict};

const RULE: &str = "-----------------------------------------------------------------";

/// Phrase naming the resolver a report is about.
pub fn resolver_label(resolver: &Resolver) -> String {
    match resolver {
        Resolver::System => "with system resolver".to_string(),
        Resolver::Explicit(_) => format!("with resolver: {resolver}"),
    }
}

/// Heading printed before a CDN's hostnames are probed.
pub fn cdn_header(name: &str) -> String {
    format!("{RULE}\nLooking up CDN: {name} diagnostics addresses...\n{RULE}\n")
}

/// Heading printed before the simple diagnostics target is probed.
pub fn target_header(host: &str) -> String {
    format!("Looking up {host} diagnostics address...\n")
}

/// Line listing the nameservers of the system DNS configuration.
pub fn dns_servers_line(nameservers: &[SocketAddr]) -> String {
    let servers: Vec<String> = nameservers.iter().map(|ns| ns.ip().to_string()).collect();
    format!("DNS Server(s): {}\n\n", servers.join(", "))
}

/// Successful and failed attempts, one per line, prefixed `+` and `-`.
pub fn render_listing(report: &ResolverReport) -> String {
    let mut out = format!("Successful lookups: {}\n", report.success_count());
    push_attempts(&mut out, '+', &report.successes);
    let _ = writeln!(out, "\nFailed lookups: {}", report.failure_count());
    push_attempts(&mut out, '-', &report.failures);
    out.push('\n');
    out
}

fn push_attempts(out: &mut String, prefix: char, attempts: &[LookupAttempt]) {
    for attempt in attempts {
        let _ = writeln!(out, "{prefix}{attempt}");
    }
}

/// Summary of one resolver's batch.
pub fn render_report(report: &ResolverReport) -> String {
    let label = resolver_label(&report.resolver);
    let hosts = if report.single_host {
        String::new()
    } else {
        format!(" on {} host(s)", report.host_count)
    };

    match &report.verdict {
        ResolverVerdict::NoCacheDetected => {
            format!("Unable to detect any LANCache instances {label}\n\n")
        }
        ResolverVerdict::Consistent => format!(
            "Successfully ran {} diagnostics iteration(s){hosts} {label}\n\n",
            report.iterations
        ),
        ResolverVerdict::Inconsistent { delta } => {
            let mut out = format!(
                "Unsuccessfully ran {} diagnostics iteration(s){hosts} {label}\n\n",
                report.iterations
            );
            out.push_str(&render_listing(report));
            out.push_str("Didn't match:\n");
            for attempt in delta {
                let _ = writeln!(out, "{attempt}");
            }
            out.push('\n');
            out
        }
    }
}
