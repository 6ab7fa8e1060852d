use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
  #[serde(rename = "_highlightResult")]
  pub(crate) highlight_result: HighlightResult,
  pub(crate) image: String,
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  pub(crate) price: Number,
}
