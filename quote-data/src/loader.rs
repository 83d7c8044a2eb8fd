use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use quote_core::{AccessorySlot, AccessoryVariant, Catalog, FabricSelection};

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown accessory slot '{0}' (expected one of rail, tassel, hook, sheer_fabric, sheer_rail)")]
    UnknownSlot(String),

    /// Quantity-type slots are not width-constrained; a `max_width` there is
    /// almost certainly a mis-filled row.
    #[error("accessory '{id}': slot '{slot}' does not take a max_width")]
    UnexpectedMaxWidth { slot: String, id: String },

    #[error("'{id}' has a non-positive price {price}")]
    NonPositivePrice { id: String, price: Decimal },
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the fabric catalog CSV.
///
/// Columns:
/// - `id`: stable catalog identifier
/// - `name`: display name
/// - `category`: category tag (e.g. blackout, sheer, printed)
/// - `price_per_meter`: whole Rupiah per meter
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FabricRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_per_meter: Decimal,
}

/// A single record from the accessory catalog CSV.
///
/// Columns:
/// - `slot`: one of rail, tassel, hook, sheer_fabric, sheer_rail
/// - `id`, `name`, `price`: as for fabrics; the price unit depends on the
///   slot (per meter, per piece, or per set)
/// - `description`: optional free text
/// - `max_width`: maximum supported width in centimeters; only meaningful
///   for rail-type slots, empty means unconstrained
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccessoryRecord {
    pub slot: String,
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub max_width: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for the fabric catalog CSV supplied by the catalog source.
pub struct FabricCatalogLoader;

impl FabricCatalogLoader {
    /// Parse fabric records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice. Prices must be positive.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<FabricRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: FabricRecord = result?;
            if record.price_per_meter <= Decimal::ZERO {
                return Err(CatalogLoaderError::NonPositivePrice {
                    id: record.id,
                    price: record.price_per_meter,
                });
            }
            records.push(record);
        }

        Ok(records)
    }
}

/// Loader for the accessory catalog CSV, covering all five slots in one file.
pub struct AccessoryCatalogLoader;

impl AccessoryCatalogLoader {
    /// Parse accessory records from a CSV reader.
    ///
    /// Validates that the slot code is known, that the price is positive and
    /// that `max_width` only appears on width-constrained slots.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<AccessoryRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: AccessoryRecord = result?;

            let slot = AccessorySlot::parse(&record.slot)
                .ok_or_else(|| CatalogLoaderError::UnknownSlot(record.slot.clone()))?;
            if record.price <= Decimal::ZERO {
                return Err(CatalogLoaderError::NonPositivePrice {
                    id: record.id,
                    price: record.price,
                });
            }
            if record.max_width.is_some() && !slot.is_width_constrained() {
                return Err(CatalogLoaderError::UnexpectedMaxWidth {
                    slot: record.slot,
                    id: record.id,
                });
            }

            records.push(record);
        }

        Ok(records)
    }
}

/// Builds an in-memory [`Catalog`] from the two catalog CSVs.
pub fn load_catalog<F: Read, A: Read>(
    fabrics: F,
    accessories: A,
) -> Result<Catalog, CatalogLoaderError> {
    let mut catalog = Catalog::default();

    for record in FabricCatalogLoader::parse(fabrics)? {
        catalog.fabrics.push(FabricSelection {
            id: record.id,
            name: record.name,
            category: record.category,
            price_per_meter: record.price_per_meter,
        });
    }

    for record in AccessoryCatalogLoader::parse(accessories)? {
        // parse() already validated the slot code.
        let Some(slot) = AccessorySlot::parse(&record.slot) else {
            return Err(CatalogLoaderError::UnknownSlot(record.slot));
        };
        catalog.push_variant(
            slot,
            AccessoryVariant {
                id: record.id,
                name: record.name,
                price: record.price,
                description: record.description,
                max_width: record.max_width,
            },
        );
    }

    Ok(catalog)
}
