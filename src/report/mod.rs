//! Report rendering and output.
//!
//! The report is what the operator reads: it is written to stdout and mirrored
//! to the output file. Log records are separate and go through `log`.

mod render;
mod sink;
mod summary;

pub use render::{
    cdn_header, dns_servers_line, render_listing, render_report, resolver_label, target_header,
};
pub use sink::OutputSink;
pub use summary::DiagnosticsSummary;
