use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One administrative unit: province, district (kabupaten/kota),
/// subdistrict (kecamatan) or village (kelurahan/desa)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Region {
    /// Dotted code encoding the region's ancestry
    #[schema(example = "11.01")]
    pub code: String,
    #[schema(example = "Kabupaten Aceh Selatan")]
    pub name: String,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
