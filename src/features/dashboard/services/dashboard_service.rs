use crate::core::error::Result;
use crate::features::categories::DynCategoryRepository;
use crate::features::dashboard::dtos::DashboardStatsDto;
use crate::features::marcas::DynMarcaRepository;

/// Service for dashboard queries
pub struct DashboardService {
    categories: DynCategoryRepository,
    marcas: DynMarcaRepository,
}

impl DashboardService {
    pub fn new(categories: DynCategoryRepository, marcas: DynMarcaRepository) -> Self {
        Self { categories, marcas }
    }

    /// Total and active counts for both record types
    pub async fn get_stats(&self) -> Result<DashboardStatsDto> {
        let (categories, marcas) = tokio::try_join!(self.categories.stats(), self.marcas.stats())?;
        Ok(DashboardStatsDto::new(categories, marcas))
    }
}
