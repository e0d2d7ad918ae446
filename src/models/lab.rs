use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Lab {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Lab {
    fn new(id: i64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// The fixed lab catalog served by `GET /labs`.
pub fn catalog() -> Vec<Lab> {
    vec![
        Lab::new(
            1,
            "Density Lab",
            "Explore the concept of density with various liquids.",
        ),
        Lab::new(
            2,
            "Soil pH Testing",
            "Test the pH levels of different soil samples.",
        ),
        Lab::new(
            3,
            "Osmosis in Plant Cells",
            "Observe the process of osmosis using potato slices.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_labs_with_unique_ids() {
        let labs = catalog();
        assert_eq!(labs.len(), 3);
        let ids: Vec<i64> = labs.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
