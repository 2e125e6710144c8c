use venuvibe_store::Vendor;

use super::filter::matches_search;

/// Vendor catalog browser.
#[derive(Debug, Clone, Default)]
pub struct VendorListView {
    vendors: Vec<Vendor>,
    pub search: String,
    /// Category slug; `None` shows every category.
    pub category: Option<String>,
    /// Vendors without a rating only pass when this is 0.
    pub min_rating: f32,
}

impl VendorListView {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors,
            ..Self::default()
        }
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn visible(&self) -> Vec<&Vendor> {
        let category = self.category.as_deref().map(str::to_lowercase);
        self.vendors
            .iter()
            .filter(|v| {
                matches_search(&self.search, &[Some(v.name.as_str()), v.description.as_deref()])
            })
            .filter(|v| category.as_deref().map_or(true, |c| v.category == c))
            .filter(|v| v.rating.unwrap_or(0.0) >= self.min_rating)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for vendor in &self.vendors {
            if !seen.contains(&vendor.category.as_str()) {
                seen.push(&vendor.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use venuvibe_shared::VendorId;

    use super::*;

    fn vendor(
        id: &str,
        name: &str,
        category: &str,
        description: &str,
        rating: Option<f32>,
    ) -> Vendor {
        Vendor {
            id: VendorId::from(id),
            created_at: Utc::now(),
            name: name.into(),
            category: category.into(),
            description: Some(description.into()),
            contact_email: None,
            contact_phone: None,
            website: None,
            rating,
            price_tier: Some("$$".into()),
            image_url: None,
        }
    }

    fn fixture() -> VendorListView {
        VendorListView::new(vec![
            vendor(
                "1",
                "Crystal Gardens",
                "venue",
                "Elegant garden venue with lake views",
                Some(4.8),
            ),
            vendor("2", "Gourmet Delights", "catering", "Farm-to-table catering", Some(4.5)),
            vendor("3", "Bloom & Petal", "florist", "Seasonal arrangements", None),
            vendor("4", "Harbor Hall", "venue", "Waterfront ballroom", Some(3.9)),
        ])
    }

    fn names<'a>(rows: &[&'a Vendor]) -> Vec<&'a str> {
        rows.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn search_covers_name_and_description() {
        let mut view = fixture();
        view.search = "garden".into();
        assert_eq!(names(&view.visible()), ["Crystal Gardens"]);

        view.search = "CATERING".into();
        assert_eq!(names(&view.visible()), ["Gourmet Delights"]);
    }

    #[test]
    fn category_and_rating_filters() {
        let mut view = fixture();
        view.category = Some("Venue".into());
        assert_eq!(names(&view.visible()), ["Crystal Gardens", "Harbor Hall"]);

        view.min_rating = 4.0;
        assert_eq!(names(&view.visible()), ["Crystal Gardens"]);

        view.category = None;
        assert_eq!(names(&view.visible()), ["Crystal Gardens", "Gourmet Delights"]);
    }

    #[test]
    fn unrated_vendors_show_without_a_minimum() {
        let view = fixture();
        assert_eq!(view.visible().len(), 4);
    }

    #[test]
    fn distinct_categories() {
        assert_eq!(fixture().categories(), ["venue", "catering", "florist"]);
    }
}
