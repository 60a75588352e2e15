use serde::Deserialize;

/// A selectable crop type, as served by the backend catalog endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Crop {
    pub name: String,
}

impl Crop {
    /// Crop names arrive lowercase; the form shows them capitalized.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// A selectable soil type. Soil names display verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Soil {
    pub name: String,
}

/// Response of `GET /api/crops/`: both dropdown option lists in one call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
pub struct Catalog {
    pub crops: Vec<Crop>,
    pub soils: Vec<Soil>,
}
