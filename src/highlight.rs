use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct HighlightedField {
  pub(crate) value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HighlightResult {
  pub(crate) name: HighlightedField,
}
