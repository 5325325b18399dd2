use super::response_common::SerdeJSONBodyHTTPResponseType;

/// One debris object as stored in the catalog file, before any enrichment.
///
/// Field names follow the upstream satellite-catalog export, hence the
/// shouting serde renames.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct CatalogEntry {
    #[serde(rename = "OBJECT_NAME")]
    object_name: String,
    /// Radar cross-section category (`SMALL`/`MEDIUM`/`LARGE`).
    #[serde(rename = "RCS_SIZE")]
    rcs_size: String,
    /// Launch date, `DD/MM/YYYY`.
    #[serde(rename = "LAUNCH")]
    launch: String,
    /// Perigee height above the surface in km.
    #[serde(rename = "PERIGEE")]
    perigee_km: f64,
}

impl CatalogEntry {
    pub fn object_name(&self) -> &str { &self.object_name }
    pub fn rcs_size(&self) -> &str { &self.rcs_size }
    pub fn launch(&self) -> &str { &self.launch }
    pub fn perigee_km(&self) -> f64 { self.perigee_km }

    #[cfg(test)]
    pub fn test(object_name: &str, rcs_size: &str, launch: &str, perigee_km: f64) -> Self {
        Self {
            object_name: object_name.to_string(),
            rcs_size: rcs_size.to_string(),
            launch: launch.to_string(),
            perigee_km,
        }
    }
}

/// Full catalog payload, a bare JSON array of entries.
#[derive(serde::Deserialize, Debug)]
pub struct DebrisCatalogResponse(pub Vec<CatalogEntry>);

impl SerdeJSONBodyHTTPResponseType for DebrisCatalogResponse {}
