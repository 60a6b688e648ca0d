use serde::Deserialize;

/// One host entry reported by a discovery pass.
///
/// Field names on the wire follow the scanner payload (`ips`, `mac`,
/// `vendor`, `mobile`). Entries are ephemeral: they exist only within
/// the cycle that produced them and survive solely through the records
/// the reconciler emits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveredHost {
    /// Addresses observed for the host, most specific first. May be empty.
    #[serde(rename = "ips", default)]
    pub addresses: Vec<String>,

    /// Hardware (MAC) identifier, when the scanner resolved one.
    #[serde(rename = "mac", default)]
    pub hardware_id: Option<String>,

    /// Vendor label resolved from the hardware identifier.
    #[serde(default)]
    pub vendor: Option<String>,

    /// Scanner heuristic: the host looks like a mobile device.
    #[serde(rename = "mobile", default)]
    pub is_mobile: bool,
}
