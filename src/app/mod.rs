//! Main application modules.
//!
//! This module provides the interactive menu, the local network report printed
//! before a run, and run statistics used by the binary.

pub mod menu;
pub mod network;
pub mod statistics;

// Re-export public API
pub use menu::{interactive_loop, run_request, select_cdns, select_mode, MenuChoice};
pub use network::{interface_addresses, print_network_info, render_interfaces, InterfaceAddress};
pub use statistics::{print_error_statistics, print_summary};
