//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::model::{ClusterEntry, GlobalService, Infrastructure};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render clusters, local kubeconfig details included
    pub fn render_clusters(&self, clusters: &[ClusterEntry]) -> String {
        if clusters.is_empty() {
            return "No clusters found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("CLUSTER").set_alignment(CellAlignment::Left),
                Cell::new("ADDRESS").set_alignment(CellAlignment::Left),
                Cell::new("KUBECONFIG").set_alignment(CellAlignment::Left),
                Cell::new("CONTEXT").set_alignment(CellAlignment::Left),
            ]);

        for entry in clusters {
            let path = entry.kubeconfig_path.as_deref();
            let context = entry.kubeconfig_context.as_deref();
            table.add_row(vec![
                Cell::new(entry.name()),
                Cell::new(entry.address()),
                Cell::new(path.unwrap_or("-")).fg(self.theme.get_optional_color(path)),
                Cell::new(context.unwrap_or("-")).fg(self.theme.get_optional_color(context)),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Clusters {} ─╮\n",
            format!("[{} clusters]", clusters.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Render global services as stored
    pub fn render_services(&self, services: &[&GlobalService]) -> String {
        if services.is_empty() {
            return "No global services found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("SERVICE").set_alignment(CellAlignment::Left),
                Cell::new("NAMESPACE").set_alignment(CellAlignment::Left),
                Cell::new("HOSTNAME").set_alignment(CellAlignment::Left),
                Cell::new("ADDRESS").set_alignment(CellAlignment::Left),
                Cell::new("BACKENDS").set_alignment(CellAlignment::Left),
            ]);

        for svc in services {
            let backends = svc.backend_clusters().join(", ");
            table.add_row(vec![
                Cell::new(&svc.name),
                Cell::new(svc.namespace.as_deref().unwrap_or("-")),
                Cell::new(&svc.hostname),
                Cell::new(svc.address.as_deref().unwrap_or("-")),
                Cell::new(if backends.is_empty() { "-".to_string() } else { backends }),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Global Services {} ─╮\n",
            format!("[{} services]", services.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Render every service with its backend clusters resolved against the infrastructure
    pub fn render_check_report(
        &self,
        services: &[&GlobalService],
        infrastructure: &dyn Infrastructure,
    ) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("SERVICE").set_alignment(CellAlignment::Left),
                Cell::new("BACKENDS").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
            ]);

        for svc in services {
            let clusters = svc.backend_clusters();
            let resolved = clusters
                .iter()
                .filter(|c| infrastructure.contains_cluster(c))
                .count();

            let backends = clusters
                .iter()
                .map(|c| {
                    let icon = if infrastructure.contains_cluster(c) {
                        StatusIcon::SUCCESS
                    } else {
                        StatusIcon::ERROR
                    };
                    format!("{} {}", icon, c)
                })
                .collect::<Vec<_>>()
                .join("\n");

            let color = self.theme.get_resolution_color(resolved, clusters.len());
            table.add_row(vec![
                Cell::new(&svc.name),
                Cell::new(backends),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_resolution_icon(resolved, clusters.len()),
                    StatusIcon::get_status_text(resolved, clusters.len())
                ))
                .fg(color),
            ]);
        }

        let mut output = String::new();
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} Resolved  {} Partial  {} Unresolved\n",
            StatusIcon::SUCCESS.green(),
            StatusIcon::WARNING.yellow(),
            StatusIcon::ERROR.red()
        ));
        output
    }
}
