//! `list` and `stats` command handlers.
//!
//! Both run the same derived views as the dependency explorer so the CLI
//! and the dashboard always agree.

use super::output::{cell, column_width, write_output, OutputFormat, OutputTarget};
use super::EXIT_OK;
use crate::explorer::DependencyExplorer;
use crate::model::{Company, ProviderId};
use anyhow::Result;
use serde::Serialize;
use std::time::Instant;

/// Options for `cloud-deps list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive name filter
    pub search: Option<String>,
    /// Only companies on this provider
    pub provider: Option<ProviderId>,
    pub format: OutputFormat,
    pub output: Option<std::path::PathBuf>,
    pub quiet: bool,
}

/// Run the list command
pub fn run_list(companies: Vec<Company>, options: ListOptions) -> Result<i32> {
    let mut explorer = DependencyExplorer::new(companies);
    if let Some(search) = &options.search {
        explorer.set_search(search.as_str(), Instant::now());
    }
    explorer.set_selected(options.provider);

    let matches = explorer.filtered_companies();
    tracing::debug!(matches = matches.len(), "list filtered");

    let output = match options.format {
        OutputFormat::Json => serde_json::to_string_pretty(&matches)?,
        OutputFormat::Table => format_company_table(&explorer.display_title(), &matches),
    };
    write_output(
        &output,
        &OutputTarget::from_option(options.output),
        options.quiet,
    )?;
    Ok(EXIT_OK)
}

/// Format companies as an aligned table.
pub fn format_company_table(title: &str, companies: &[&Company]) -> String {
    let mut out = format!("{title}\n\n");
    if companies.is_empty() {
        out.push_str("0 companies found\n");
        return out;
    }

    let name_w = column_width(companies.iter().map(|c| c.name.as_str()), 7, 32);
    let sym_w = column_width(companies.iter().map(|c| c.symbol.as_str()), 6, 8);
    let dom_w = column_width(companies.iter().map(|c| c.domain.as_str()), 6, 32);

    out.push_str(&format!(
        "{:<name_w$}  {:<sym_w$}  {:<dom_w$}  PROVIDER\n",
        "COMPANY", "SYMBOL", "DOMAIN"
    ));
    for company in companies {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            cell(&company.name, name_w),
            cell(&company.symbol, sym_w),
            cell(&company.domain, dom_w),
            company.provider.display_name()
        ));
    }
    out.push_str(&format!("\n{} companies found\n", companies.len()));
    out
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Serialize)]
struct ProviderShare {
    provider: ProviderId,
    name: &'static str,
    count: usize,
    percent: u32,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    total: usize,
    big_three_percent: u32,
    providers: Vec<ProviderShare>,
}

fn build_stats(explorer: &DependencyExplorer) -> StatsReport {
    let total = explorer.company_count();
    StatsReport {
        total,
        big_three_percent: explorer.big_three_share(),
        providers: explorer
            .pie_data()
            .into_iter()
            .map(|slice| ProviderShare {
                provider: slice.provider,
                name: slice.provider.display_name(),
                count: slice.count,
                percent: slice.percent_of(total),
                color: slice.color,
            })
            .collect(),
    }
}

fn format_stats_table(report: &StatsReport) -> String {
    let mut out = format!("Cloud dependencies across {} companies\n\n", report.total);
    out.push_str(&format!("{:<14}  {:>5}  {:>5}  COLOR\n", "PROVIDER", "COUNT", "SHARE"));
    for share in &report.providers {
        out.push_str(&format!(
            "{:<14}  {:>5}  {:>4}%  {}\n",
            share.name, share.count, share.percent, share.color
        ));
    }
    out.push_str(&format!(
        "\n{}% of companies run on AWS, Azure or GCP\n",
        report.big_three_percent
    ));
    out
}

/// Run the stats command
pub fn run_stats(
    companies: Vec<Company>,
    format: OutputFormat,
    output: Option<std::path::PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let explorer = DependencyExplorer::new(companies);
    let report = build_stats(&explorer);
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => format_stats_table(&report),
    };
    write_output(&rendered, &OutputTarget::from_option(output), quiet)?;
    Ok(EXIT_OK)
}
