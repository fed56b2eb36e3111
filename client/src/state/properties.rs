//! Filtering and sorting for the property listing page.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use crate::data::types::Property;

/// Listing sort order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Original (curated) order.
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    /// Most bedrooms first, cheaper first on ties.
    Bedrooms,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [SortOrder::Recommended, SortOrder::PriceAsc, SortOrder::PriceDesc, SortOrder::Bedrooms];

    /// Value used by the `<select>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Bedrooms => "bedrooms",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::Bedrooms => "Most bedrooms",
        }
    }
}

/// Current filter controls on the listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    pub query: String,
    pub max_price: Option<u32>,
    pub min_bedrooms: Option<u8>,
    /// Every selected amenity must be present.
    pub amenities: Vec<String>,
    pub tag: Option<String>,
    pub sort: SortOrder,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let haystack_hit = property.title.to_lowercase().contains(&query)
                || property.location.to_lowercase().contains(&query)
                || property.tags.iter().any(|t| t.to_lowercase().contains(&query));
            if !haystack_hit {
                return false;
            }
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|min| property.bedrooms < min) {
            return false;
        }
        if !self.amenities.iter().all(|a| property.amenities.contains(a)) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !property.tags.contains(tag) {
                return false;
            }
        }
        true
    }

    /// Matching listings in the selected order.
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        let mut out: Vec<Property> = properties.iter().filter(|p| self.matches(p)).cloned().collect();
        match self.sort {
            SortOrder::Recommended => {}
            SortOrder::PriceAsc => out.sort_by_key(|p| p.price),
            SortOrder::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Bedrooms => out.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms).then(a.price.cmp(&b.price))),
        }
        out
    }

    /// Add or remove an amenity from the required set.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(idx) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(idx);
        } else {
            self.amenities.push(amenity.to_owned());
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Distinct amenities across `properties`, sorted.
pub fn all_amenities(properties: &[Property]) -> Vec<String> {
    distinct_sorted(properties.iter().flat_map(|p| p.amenities.iter()))
}

/// Distinct tags across `properties`, sorted.
pub fn all_tags(properties: &[Property]) -> Vec<String> {
    distinct_sorted(properties.iter().flat_map(|p| p.tags.iter()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = values.cloned().collect();
    out.sort();
    out.dedup();
    out
}
