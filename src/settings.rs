use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct FacetOrder {
  pub(crate) order: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FacetOrdering {
  pub(crate) facets: FacetOrder,
  pub(crate) values: BTreeMap<&'static str, FacetValuesOrder>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FacetValuesOrder {
  pub(crate) order: Vec<&'static str>,
  pub(crate) sort_remaining_by: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndexSettings {
  pub(crate) attributes_for_faceting: Vec<&'static str>,
  pub(crate) custom_ranking: Vec<&'static str>,
  pub(crate) rendering_content: RenderingContent,
  pub(crate) searchable_attributes: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenderingContent {
  pub(crate) facet_ordering: FacetOrdering,
}

impl IndexSettings {
  pub(crate) fn product_listing() -> Self {
    let mut values = BTreeMap::new();

    values.insert(
      "price_range",
      FacetValuesOrder {
        order: vec![
          "1 - 50",
          "50 - 100",
          "100 - 200",
          "200 - 500",
          "500 - 2000",
          "> 2000",
        ],
        sort_remaining_by: "hidden",
      },
    );

    values.insert(
      "rating",
      FacetValuesOrder {
        order: vec!["6", "5", "4", "3", "2", "1"],
        sort_remaining_by: "hidden",
      },
    );

    Self {
      attributes_for_faceting: vec![
        "brand",
        "categories",
        "price_range",
        "rating",
      ],
      custom_ranking: vec!["desc(popularity)", "desc(rating)"],
      rendering_content: RenderingContent {
        facet_ordering: FacetOrdering {
          facets: FacetOrder {
            order: vec!["rating", "price_range"],
          },
          values,
        },
      },
      searchable_attributes: vec!["name", "description"],
    }
  }
}
