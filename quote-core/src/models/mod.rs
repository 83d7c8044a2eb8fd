mod accessory;
mod catalog;
mod contact;
mod fabric;
mod method;
mod window_item;

pub use accessory::{AccessorySelection, AccessorySlot, AccessoryVariant};
pub use catalog::Catalog;
pub use contact::ContactRecord;
pub use fabric::FabricSelection;
pub use method::CalculationMethod;
pub use window_item::{ItemKind, PackageKind, ValidationError, WindowItem, WindowItemDraft};
