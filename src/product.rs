use super::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Product {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) brand: Option<String>,
  pub(crate) categories: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) free_shipping: Option<bool>,
  pub(crate) image: String,
  pub(crate) name: String,
  #[serde(rename = "objectID", skip_serializing_if = "Option::is_none")]
  pub(crate) object_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) popularity: Option<u64>,
  pub(crate) price: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) price_range: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) rating: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) url: Option<String>,
}
