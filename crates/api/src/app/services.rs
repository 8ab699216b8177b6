use std::sync::Arc;

use fulfilment_infra::{AppConfig, ConfigError, InMemoryWarehouseStore, StaticLocationDirectory};
use fulfilment_warehouses::WarehouseService;

pub type Warehouses = WarehouseService<Arc<InMemoryWarehouseStore>, Arc<StaticLocationDirectory>>;

/// Everything the handlers need, shared behind one `Arc`.
#[derive(Debug)]
pub struct AppServices {
    pub warehouses: Warehouses,
}

impl AppServices {
    pub fn new(store: Arc<InMemoryWarehouseStore>, locations: Arc<StaticLocationDirectory>) -> Self {
        Self {
            warehouses: WarehouseService::new(store, locations),
        }
    }

    /// Empty store over the given location table.
    pub fn in_memory(locations: StaticLocationDirectory) -> Self {
        Self::new(Arc::new(InMemoryWarehouseStore::new()), Arc::new(locations))
    }
}

pub fn build_services(config: &AppConfig) -> Result<AppServices, ConfigError> {
    let locations = config.location_directory()?;
    tracing::info!(
        locations = locations.locations().len(),
        source = config
            .locations_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        "location directory loaded"
    );
    Ok(AppServices::in_memory(locations))
}
