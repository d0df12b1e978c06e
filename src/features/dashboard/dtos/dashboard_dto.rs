use serde::Serialize;

use crate::shared::types::RecordStats;

/// Counts rendered on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStatsDto {
    pub categories_total: i64,
    pub categories_active: i64,
    pub marcas_total: i64,
    pub marcas_active: i64,
}

impl DashboardStatsDto {
    pub fn new(categories: RecordStats, marcas: RecordStats) -> Self {
        Self {
            categories_total: categories.total,
            categories_active: categories.active,
            marcas_total: marcas.total,
            marcas_active: marcas.active,
        }
    }
}
