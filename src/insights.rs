use super::*;

pub(crate) struct InsightsBinder;

impl EventBinder for InsightsBinder {
  fn bind(&self, kind: EventKind, hit: &SearchHit, label: &str) -> String {
    format!(
      r#"data-insights-event="{kind}" data-insights-object-id="{id}" data-insights-label="{label}""#,
      id = html_escape::encode_double_quoted_attribute(&hit.object_id),
      label = html_escape::encode_double_quoted_attribute(label),
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::highlight::HighlightedField};

  fn sample_hit(object_id: &str) -> SearchHit {
    SearchHit {
      highlight_result: HighlightResult {
        name: HighlightedField {
          value: "Camera".to_string(),
        },
      },
      image: "camera.png".to_string(),
      object_id: object_id.to_string(),
      price: serde_json::from_str::<Number>("199").unwrap(),
    }
  }

  #[test]
  fn binds_insights_attributes() {
    let attributes = InsightsBinder.bind(
      EventKind::Click,
      &sample_hit("1234"),
      "PLP: Product Clicked",
    );

    assert_eq!(
      attributes,
      r#"data-insights-event="click" data-insights-object-id="1234" data-insights-label="PLP: Product Clicked""#
    );
  }

  #[test]
  fn escapes_attribute_values() {
    let attributes = InsightsBinder.bind(
      EventKind::Conversion,
      &sample_hit(r#"a"b"#),
      r#"say "hi""#,
    );

    assert!(attributes.contains(r#"data-insights-object-id="a&quot;b""#));
    assert!(attributes.contains(r#"data-insights-label="say &quot;hi&quot;""#));
  }
}
