//! Interactive mode and CDN selection.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};
use log::warn;

use crate::app::network::print_network_info;
use crate::app::statistics::print_summary;
use crate::config::{Cdn, Config, Mode, CDNS};
use crate::dns::ResolverSet;
use crate::report::{DiagnosticsSummary, OutputSink};
use crate::{run_diagnostics, DiagnosticsRequest};

const EXIT_LABEL: &str = "Exit";
const CDN_PAGE_SIZE: usize = 24;

/// What the operator picked from the mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Mode),
    Exit,
}

/// Mode menu entries, in display order.
pub fn menu_items() -> Vec<&'static str> {
    Mode::value_variants()
        .iter()
        .map(Mode::label)
        .chain(std::iter::once(EXIT_LABEL))
        .collect()
}

/// Choice for the menu entry at `index`; anything past the modes is `Exit`.
pub fn choice_from_index(index: usize) -> MenuChoice {
    Mode::value_variants()
        .get(index)
        .map_or(MenuChoice::Exit, |mode| MenuChoice::Run(*mode))
}

/// Asks for a diagnostics mode.
pub fn select_mode() -> Result<MenuChoice> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select Mode")
        .items(&menu_items())
        .default(0)
        .interact()
        .context("Mode prompt failed")?;
    Ok(choice_from_index(index))
}

/// Asks for one or more CDNs, repeating until at least one is picked.
pub fn select_cdns() -> Result<Vec<Cdn>> {
    let names: Vec<&str> = CDNS.iter().map(|cdn| cdn.name).collect();
    loop {
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select CDN(s)")
            .items(&names)
            .max_length(CDN_PAGE_SIZE)
            .interact()
            .context("CDN prompt failed")?;
        if !picked.is_empty() {
            return Ok(picked.into_iter().map(|i| CDNS[i]).collect());
        }
        warn!("Select at least one CDN (space toggles, enter confirms)");
    }
}

/// Prints the network context and runs one request, writing the report to
/// stdout and `output`.
pub async fn run_request(
    config: &Config,
    request: &DiagnosticsRequest,
    output: Option<&Path>,
    nameservers: &[SocketAddr],
) -> Result<DiagnosticsSummary> {
    let mut sink = OutputSink::create(output).context("Failed to open output file")?;
    print_network_info(&mut sink, nameservers);
    let summary = run_diagnostics(config, request, &mut sink)
        .await
        .context("Diagnostics failed")?;
    print_summary(&summary);
    Ok(summary)
}

/// Shows the mode menu and runs diagnostics until the operator picks `Exit`.
pub async fn interactive_loop(
    config: &Config,
    resolvers: &ResolverSet,
    output: Option<&Path>,
    nameservers: &[SocketAddr],
) -> Result<()> {
    loop {
        let mode = match select_mode()? {
            MenuChoice::Run(mode) => mode,
            MenuChoice::Exit => return Ok(()),
        };
        let cdns = if mode == Mode::Custom {
            select_cdns()?
        } else {
            Vec::new()
        };
        let request = DiagnosticsRequest {
            mode,
            cdns,
            resolvers: resolvers.clone(),
        };
        run_request(config, &request, output, nameservers).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items() {
        assert_eq!(
            menu_items(),
            vec![
                "Diagnostics - Simple",
                "Diagnostics - Full",
                "Diagnostics - Custom",
                "Exit"
            ]
        );
    }

    #[test]
    fn test_choice_from_index() {
        assert_eq!(choice_from_index(0), MenuChoice::Run(Mode::Simple));
        assert_eq!(choice_from_index(2), MenuChoice::Run(Mode::Custom));
        assert_eq!(choice_from_index(3), MenuChoice::Exit);
    }
}
