//! `regions` command handler.

use super::output::{cell, column_width, write_output, OutputFormat, OutputTarget};
use super::EXIT_OK;
use crate::explorer::RegionsExplorer;
use crate::model::{Geography, Region};
use anyhow::Result;
use std::path::PathBuf;

/// Options for `cloud-deps regions`.
#[derive(Debug, Clone, Default)]
pub struct RegionsOptions {
    /// Matches code, name or location
    pub search: Option<String>,
    pub geography: Option<Geography>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the regions command
pub fn run_regions(regions: Vec<Region>, options: RegionsOptions) -> Result<i32> {
    let mut explorer = RegionsExplorer::new(regions);
    if let Some(search) = &options.search {
        explorer.set_search(search.as_str());
    }
    explorer.set_geography(options.geography);

    let matches = explorer.filtered();
    let output = match options.format {
        OutputFormat::Json => serde_json::to_string_pretty(&matches)?,
        OutputFormat::Table => format_region_table(&explorer, &matches),
    };
    write_output(
        &output,
        &OutputTarget::from_option(options.output),
        options.quiet,
    )?;
    Ok(EXIT_OK)
}

fn format_region_table(explorer: &RegionsExplorer, regions: &[&Region]) -> String {
    let mut out = String::new();
    if let Some(geography) = explorer.geography() {
        out.push_str(&format!("Geography: {}\n\n", geography.label()));
    }
    if regions.is_empty() {
        out.push_str("0 regions found\n");
        return out;
    }

    let code_w = column_width(regions.iter().map(|r| r.code.as_str()), 6, 16);
    let name_w = column_width(regions.iter().map(|r| r.name.as_str()), 4, 36);

    out.push_str(&format!(
        "{:<code_w$}  {:<name_w$}  {:>3}  {:>5}  OPT-IN\n",
        "REGION", "NAME", "AZS", "SINCE"
    ));
    for region in regions {
        out.push_str(&format!(
            "{}  {}  {:>3}  {:>5}  {}\n",
            cell(&region.code, code_w),
            cell(&region.name, name_w),
            region.availability_zones,
            region.launch_year,
            if region.opt_in_required { "yes" } else { "no" }
        ));
    }

    let zones: usize = regions
        .iter()
        .map(|r| usize::from(r.availability_zones))
        .sum();
    out.push_str(&format!(
        "\n{} regions, {} availability zones\n",
        regions.len(),
        zones
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_regions;

    #[test]
    fn test_region_table_filters_geography() {
        let mut explorer = RegionsExplorer::new(builtin_regions());
        explorer.set_geography(Some(Geography::Europe));
        let matches = explorer.filtered();
        let table = format_region_table(&explorer, &matches);

        assert!(table.starts_with("Geography: Europe"));
        assert!(table.contains("eu-west-1"));
        assert!(!table.contains("us-east-1"));
    }

    #[test]
    fn test_region_table_empty() {
        let mut explorer = RegionsExplorer::new(builtin_regions());
        explorer.set_search("atlantis");
        let table = format_region_table(&explorer, &explorer.filtered());
        assert!(table.contains("0 regions found"));
    }
}
