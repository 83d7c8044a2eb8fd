mod loader;

pub use loader::{
    AccessoryCatalogLoader, AccessoryRecord, CatalogLoaderError, FabricCatalogLoader,
    FabricRecord, load_catalog,
};
