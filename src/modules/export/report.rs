use chrono::{DateTime, Utc};

use crate::shared::constants::EXPORT_FILE_PREFIX;

/// One exported category
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of the category table at export time
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub generated_at: DateTime<Utc>,
    /// Application name printed in the document footer
    pub app_name: String,
    pub rows: Vec<ReportRow>,
}

impl CategoryReport {
    pub fn new(rows: Vec<ReportRow>, app_name: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            app_name: app_name.into(),
            rows,
        }
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn active_count(&self) -> usize {
        self.rows.iter().filter(|r| r.active).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.total() - self.active_count()
    }

    /// Download name, e.g. `categorias_2025-03-01_142530.pdf`
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}{}.{}",
            EXPORT_FILE_PREFIX,
            self.generated_at.format("%Y-%m-%d_%H%M%S"),
            extension
        )
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Activo"
    } else {
        "Inactivo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(id: i64, active: bool) -> ReportRow {
        ReportRow {
            id,
            name: format!("Categoria {}", id),
            description: None,
            active,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_counts() {
        let report = CategoryReport::new(vec![row(1, true), row(2, false), row(3, true)], "Test");
        assert_eq!(report.total(), 3);
        assert_eq!(report.active_count(), 2);
        assert_eq!(report.inactive_count(), 1);
    }

    #[test]
    fn test_file_name() {
        let mut report = CategoryReport::new(vec![], "Test");
        report.generated_at = Utc.with_ymd_and_hms(2025, 3, 1, 14, 25, 30).unwrap();
        assert_eq!(report.file_name("xlsx"), "categorias_2025-03-01_142530.xlsx");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "Activo");
        assert_eq!(status_label(false), "Inactivo");
    }
}
