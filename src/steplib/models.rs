use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadLocation {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssetUrls {
    #[serde(rename = "icon.svg", deserialize_with = "null_as_default")]
    pub icon_svg: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StepInfo {
    /// Empty when the step is still supported.
    #[serde(deserialize_with = "null_as_default")]
    pub deprecate_notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_urls: AssetUrls,
}

/// Version metadata is kept as raw JSON; its shape varies between steps.
pub type VersionMetadata = Map<String, Value>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Step {
    #[serde(deserialize_with = "null_as_default")]
    pub info: StepInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_version_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub versions: BTreeMap<String, VersionMetadata>,
    /// Key of this step in [`Manifest::steps`]. Not present in the JSON body.
    #[serde(skip)]
    pub id: String,
}

impl Step {
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        !self.info.deprecate_notes.is_empty()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(deserialize_with = "null_as_default")]
    pub format_version: String,
    /// Epoch seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub generated_at_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub steplib_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub download_locations: Vec<DownloadLocation>,
    #[serde(deserialize_with = "null_as_default")]
    pub assets_download_base_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: BTreeMap<String, Step>,
}
