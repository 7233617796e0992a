use crate::types::{AllocationResult, GeoDataset, RegionValues};

/// Line separator understood by the map's hover labels.
pub const HOVER_LINE_BREAK: &str = "<br>";

pub fn hover_text(code: &str, values: &RegionValues) -> String {
    [
        code.to_string(),
        format!("Initial: {:.2} MHz", values.initial_mhz()),
        format!("Final: {:.2} MHz", values.final_mhz()),
        format!("Change: {:.2} MHz", values.change_mhz()),
    ]
    .join(HOVER_LINE_BREAK)
}

/// Choropleth arrays in source order. Region codes are used as locations
/// unchanged.
pub fn to_geo_dataset(result: &AllocationResult) -> GeoDataset {
    let mut geo = GeoDataset {
        locations: Vec::with_capacity(result.len()),
        values: Vec::with_capacity(result.len()),
        hover_text: Vec::with_capacity(result.len()),
    };
    for (code, values) in result.iter() {
        geo.locations.push(code.to_string());
        geo.values.push(values.final_mhz());
        geo.hover_text.push(hover_text(code, values));
    }
    geo
}

impl GeoDataset {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Re-key the locations for a boundary file that uses a different
    /// identifier scheme. Values and hover text are left untouched.
    pub fn with_location_keys<F>(mut self, key: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        self.locations = self.locations.iter().map(|c| key(c)).collect();
        self
    }
}
