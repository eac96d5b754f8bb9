use crate::{Inventory, Result};
use indexmap::IndexMap;
use log::{debug, error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl Inventory {
    /// Reads the inventory persisted at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty inventory with
    /// a warning. Entries whose quantity is not an integer are dropped, each
    /// with its own warning.
    pub fn load(path: impl AsRef<Path>) -> Inventory {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(inventory) => inventory,
            Err(e) => {
                warn!(
                    "Could not load {}. Returning empty inventory.",
                    path.display()
                );
                debug!("{e}");
                Inventory::new()
            }
        }
    }

    /// Strict form of [`Inventory::load`]: read and parse failures come back
    /// to the caller instead of being replaced by an empty inventory.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Inventory> {
        let path = path.as_ref();
        let value = std::fs::read_to_string(path)?;
        let raw: IndexMap<String, Value> = serde_json::from_str(&value)?;

        let mut inventory = Inventory::new();
        for (item, qty) in raw {
            match qty.as_i64() {
                Some(qty) => {
                    inventory.items.insert(item, qty);
                }
                None if qty.is_u64() => warn!(
                    "Dropping '{item}' from {}: {qty} is out of range for a quantity.",
                    path.display()
                ),
                None => warn!(
                    "Dropping '{item}' from {}: {qty} is not an integer quantity.",
                    path.display()
                ),
            }
        }
        debug!("Loaded {} items from {}", inventory.len(), path.display());
        Ok(inventory)
    }

    /// Writes the inventory to `path` as 4-space indented JSON, replacing
    /// whatever was there.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.write_to(path) {
            Ok(()) => {
                info!("Inventory saved to {}.", path.display());
                Ok(())
            }
            Err(e) => {
                error!("Could not save inventory to {}: {e}", path.display());
                Err(e)
            }
        }
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
