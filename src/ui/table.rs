use crate::host::ModuleResolution;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct ResolutionRow {
    #[tabled(rename = "Specifier")]
    pub specifier: String,
    #[tabled(rename = "Resolved")]
    pub resolved: String,
    #[tabled(rename = "Extension")]
    pub extension: String,
}

impl ResolutionRow {
    pub fn new(specifier: &str, resolution: &ModuleResolution) -> Self {
        let (resolved, extension) = match &resolution.resolved_module {
            Some(module) => (
                module.resolved_file_name.clone(),
                module.extension.as_str().to_string(),
            ),
            None => (
                format!("unresolved ({} lookups)", resolution.failed_lookup_locations.len()),
                "-".to_string(),
            ),
        };

        Self {
            specifier: specifier.to_string(),
            resolved,
            extension,
        }
    }
}

pub fn resolution_table(rows: &[ResolutionRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}
