use crate::application::read_models::{ComponentReport, TreeRow};
use crate::component_hierarchy::domain::{Component, ComponentReference, CriticalityFilter};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the inventory section
const INVENTORY_TABLE_HEADER: &str =
    "| ID | Name | Serial Number | Asset Code | Condition | Critical |\n";

/// Markdown table separator line for the inventory section
const INVENTORY_TABLE_SEPARATOR: &str =
    "|----|------|---------------|------------|-----------|----------|\n";

/// MarkdownReportFormatter adapter rendering a human-readable component report
///
/// Sections: summary counts, the installed tree as an indented list that
/// follows the current expansion, the inventory table and, when something is
/// selected, its details.
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn or_dash(text: &str) -> String {
        if text.trim().is_empty() {
            "-".to_string()
        } else {
            Self::escape_cell(text)
        }
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "Yes"
        } else {
            "No"
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, report: &ComponentReport) {
        match &report.vessel_id {
            Some(vessel_id) => {
                output.push_str(&format!("# Vessel Components: {}\n\n", vessel_id))
            }
            None => output.push_str("# Vessel Components\n\n"),
        }
        output.push_str(&format!(
            "Generated at {} · status: **{}**\n\n",
            report.generated_at, report.status
        ));

        if let Some(error) = &report.error {
            let first_line = error.lines().next().unwrap_or_default();
            output.push_str(&format!("> ⚠️ {}\n\n", first_line));
        }
    }

    fn render_summary(&self, output: &mut String, report: &ComponentReport) {
        let stats = &report.statistics;
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Total components | {} |\n", stats.total));
        output.push_str(&format!("| Installed | {} |\n", stats.mounted));
        output.push_str(&format!("| In inventory | {} |\n", stats.inventory));
        output.push_str(&format!("| Critical | {} |\n", stats.critical));
        output.push_str(&format!("| Normal condition | {} |\n", stats.normal));
        output.push('\n');

        if !report.criteria.is_identity() {
            let mut parts = Vec::new();
            let search = report.criteria.search_text.trim();
            if !search.is_empty() {
                parts.push(format!("search `{}`", search));
            }
            if report.criteria.criticality != CriticalityFilter::All {
                parts.push(format!("criticality `{}`", report.criteria.criticality));
            }
            output.push_str(&format!("Filtered by {}.\n\n", parts.join(", ")));
        }
    }

    fn render_tree(&self, output: &mut String, rows: &[TreeRow]) {
        output.push_str("## Installed Components\n\n");
        if rows.is_empty() {
            output.push_str("_No installed components to show._\n\n");
            return;
        }

        for row in rows {
            output.push_str(&self.render_row(row));
        }
        output.push('\n');
    }

    fn render_row(&self, row: &TreeRow) -> String {
        let indent = "  ".repeat(row.depth);
        let marker = match (row.has_children, row.expanded) {
            (false, _) => "•",
            (true, false) => "▸",
            (true, true) => "▾",
        };
        let name = if row.selected {
            format!("**{}**", row.name)
        } else {
            row.name.clone()
        };

        let mut line = format!("{}- {} {} (#{})", indent, marker, name, row.id);
        if !row.condition.is_empty() {
            line.push_str(&format!(" · {}", row.condition));
        }
        if row.running_hours > 0 {
            line.push_str(&format!(" · {} h", row.running_hours));
        }
        if row.critical {
            line.push_str(" · 🔴 critical");
        }
        line.push('\n');
        line
    }

    fn render_inventory(&self, output: &mut String, inventory: &[Component]) {
        output.push_str("## Inventory\n\n");
        if inventory.is_empty() {
            output.push_str("_No inventory components to show._\n\n");
            return;
        }

        output.push_str(INVENTORY_TABLE_HEADER);
        output.push_str(INVENTORY_TABLE_SEPARATOR);
        for component in inventory {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                component.id,
                Self::escape_cell(&component.name),
                Self::or_dash(&component.serial_number),
                Self::or_dash(&component.asset_code),
                Self::or_dash(&component.last_condition),
                Self::yes_no(component.is_critical)
            ));
        }
        output.push('\n');
    }

    fn render_selected(&self, output: &mut String, component: &Component) {
        output.push_str(&format!(
            "## Selected Component: {} (#{})\n\n",
            component.name, component.id
        ));

        let reference = |r: &Option<ComponentReference>| {
            r.as_ref()
                .map(|r| Self::or_dash(&r.name))
                .unwrap_or_else(|| "-".to_string())
        };

        let fields = [
            ("Installed", Self::yes_no(component.is_mounted).to_string()),
            ("Serial number", Self::or_dash(&component.serial_number)),
            ("Asset code", Self::or_dash(&component.asset_code)),
            ("Main spec", Self::or_dash(&component.main_spec)),
            ("Class code", Self::or_dash(&component.class_code)),
            ("Condition", Self::or_dash(&component.last_condition)),
            (
                "Condition date",
                Self::or_dash(component.last_condition_date.as_deref().unwrap_or_default()),
            ),
            ("Running hours", component.running_hours.to_string()),
            ("Critical", Self::yes_no(component.is_critical).to_string()),
            ("Critical level", Self::or_dash(&component.critical_level)),
            ("Manufacturer", reference(&component.manufacturer)),
            ("Vendor", reference(&component.vendor)),
            ("Location", reference(&component.location)),
            ("Department", reference(&component.department)),
            ("Type", reference(&component.component_type)),
            ("Installation", Self::or_dash(&component.installation_desc)),
            ("Remarks", Self::or_dash(&component.remarks)),
        ];

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        for (label, value) in fields {
            output.push_str(&format!("| {} | {} |\n", label, value));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &ComponentReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_tree(&mut output, &report.rows);
        self.render_inventory(&mut output, &report.inventory);
        if let Some(selected) = &report.selected {
            self.render_selected(&mut output, selected);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_hierarchy::domain::{ComponentStatistics, FilterCriteria};

    fn row(id: u64, name: &str, depth: usize, has_children: bool, expanded: bool) -> TreeRow {
        TreeRow {
            id,
            name: name.to_string(),
            depth,
            has_children,
            expanded,
            selected: false,
            critical: false,
            condition: String::new(),
            running_hours: 0,
        }
    }

    fn spare_valve() -> Component {
        Component {
            id: 3,
            parent_component_id: 1,
            name: "Spare|Valve".to_string(),
            serial_number: "SV-1".to_string(),
            is_critical: true,
            ..Default::default()
        }
    }

    fn report() -> ComponentReport {
        ComponentReport {
            generated_at: "2026-03-01T08:00:00Z".to_string(),
            vessel_id: Some("V-1".to_string()),
            status: "ready".to_string(),
            error: None,
            statistics: ComponentStatistics {
                total: 3,
                mounted: 2,
                inventory: 1,
                critical: 1,
                normal: 0,
            },
            criteria: FilterCriteria::default(),
            rows: vec![row(1, "Engine", 0, true, true), row(2, "Piston", 1, false, false)],
            forest: vec![],
            inventory: vec![spare_valve()],
            selected: None,
        }
    }

    #[test]
    fn test_format_header_and_summary() {
        let output = MarkdownReportFormatter::new().format(&report()).unwrap();

        assert!(output.starts_with("# Vessel Components: V-1\n"));
        assert!(output.contains("| Installed | 2 |"));
        assert!(output.contains("| In inventory | 1 |"));
        assert!(!output.contains("Filtered by"));
    }

    #[test]
    fn test_format_tree_indents_by_depth() {
        let output = MarkdownReportFormatter::new().format(&report()).unwrap();

        assert!(output.contains("- ▾ Engine (#1)\n"));
        assert!(output.contains("  - • Piston (#2)\n"));
    }

    #[test]
    fn test_format_row_markers_and_badges() {
        let formatter = MarkdownReportFormatter::new();
        let mut collapsed = row(7, "Pump", 0, true, false);
        collapsed.selected = true;
        collapsed.critical = true;
        collapsed.condition = "Normal".to_string();
        collapsed.running_hours = 42;

        assert_eq!(
            formatter.render_row(&collapsed),
            "- ▸ **Pump** (#7) · Normal · 42 h · 🔴 critical\n"
        );
    }

    #[test]
    fn test_format_inventory_escapes_cells() {
        let output = MarkdownReportFormatter::new().format(&report()).unwrap();

        assert!(output.contains(INVENTORY_TABLE_HEADER));
        assert!(output.contains("| 3 | Spare\\|Valve | SV-1 | - | - | Yes |"));
    }

    #[test]
    fn test_format_empty_sections() {
        let mut report = report();
        report.rows.clear();
        report.inventory.clear();

        let output = MarkdownReportFormatter::new().format(&report).unwrap();

        assert!(output.contains("_No installed components to show._"));
        assert!(output.contains("_No inventory components to show._"));
    }

    #[test]
    fn test_format_active_filter_and_selection() {
        let mut report = report();
        report.criteria = FilterCriteria::new(" valve ", CriticalityFilter::Critical);
        report.selected = Some(spare_valve());

        let output = MarkdownReportFormatter::new().format(&report).unwrap();

        assert!(output.contains("Filtered by search `valve`, criticality `critical`."));
        assert!(output.contains("## Selected Component: Spare|Valve (#3)"));
        assert!(output.contains("| Serial number | SV-1 |"));
        assert!(output.contains("| Manufacturer | - |"));
    }

    #[test]
    fn test_format_failed_report_shows_first_error_line() {
        let mut report = report();
        report.status = "failed".to_string();
        report.error = Some("Failed to fetch components for vessel 'V-1'\nDetails: x".to_string());

        let output = MarkdownReportFormatter::new().format(&report).unwrap();

        assert!(output.contains("> ⚠️ Failed to fetch components for vessel 'V-1'\n"));
        assert!(!output.contains("Details: x"));
    }
}
