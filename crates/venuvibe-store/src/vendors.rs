//! CRUD operations for the [`Vendor`] catalog.

use chrono::Utc;
use tracing::info;

use venuvibe_shared::constants::MAX_VENDOR_RATING;
use venuvibe_shared::VendorId;

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{NewVendor, Vendor};

fn validate(name: &str, category: &str, rating: Option<f32>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("Vendor name is required".into()));
    }
    if category.trim().is_empty() {
        return Err(StoreError::Validation("Vendor category is required".into()));
    }
    if let Some(r) = rating {
        if !(0.0..=MAX_VENDOR_RATING).contains(&r) {
            return Err(StoreError::Validation(format!(
                "Vendor rating {r} is outside 0-{MAX_VENDOR_RATING}"
            )));
        }
    }
    Ok(())
}

fn category_slug(category: &str) -> String {
    category.trim().to_lowercase()
}

impl Database {
    pub fn create_vendor(&self, new: NewVendor) -> Result<Vendor> {
        validate(&new.name, &new.category, new.rating)?;

        let vendor = Vendor {
            id: VendorId::generate(),
            created_at: Utc::now(),
            name: new.name.trim().to_string(),
            category: category_slug(&new.category),
            description: new.description,
            contact_email: new.contact_email,
            contact_phone: new.contact_phone,
            website: new.website,
            rating: new.rating,
            price_tier: new.price_tier,
            image_url: new.image_url,
        };

        let vendor = self.insert_record(vendor)?;
        info!(vendor_id = %vendor.id, category = %vendor.category, "vendor created");
        Ok(vendor)
    }

    pub fn list_vendors(&self) -> Result<Vec<Vendor>> {
        self.all_records()
    }

    pub fn get_vendor(&self, id: &VendorId) -> Result<Vendor> {
        self.find_record(id.as_str())
    }

    pub fn update_vendor(&self, mut vendor: Vendor) -> Result<Vendor> {
        validate(&vendor.name, &vendor.category, vendor.rating)?;
        vendor.category = category_slug(&vendor.category);
        let vendor = self.replace_record(vendor)?;
        info!(vendor_id = %vendor.id, "vendor updated");
        Ok(vendor)
    }

    pub fn delete_vendor(&self, id: &VendorId) -> Result<()> {
        let removed = self.remove_record::<Vendor>(id.as_str())?;
        info!(vendor_id = %id, removed, "vendor deleted");
        Ok(())
    }
}
