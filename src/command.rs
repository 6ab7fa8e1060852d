use super::*;

#[derive(Debug)]
pub(crate) enum Command {
  Index {
    discount: Option<Discount>,
    path: PathBuf,
  },
  Render {
    query: String,
  },
}

impl Command {
  pub(crate) fn parse(args: &[String]) -> Result<Option<Self>> {
    match args.first().map(String::as_str) {
      Some("index") => {
        let path = args
          .get(1)
          .context("index requires a path to a products file")?;

        let discount = match (args.get(2), args.get(3)) {
          (Some(category), Some(percent)) => Some(Discount {
            category: category.clone(),
            percent: percent
              .parse()
              .context("discount percent must be a number")?,
          }),
          (Some(_), None) => {
            bail!("a discount requires both a category and a percent")
          }
          _ => None,
        };

        Ok(Some(Self::Index {
          discount,
          path: PathBuf::from(path),
        }))
      }
      Some("render") => {
        if args.len() < 2 {
          bail!("render requires a query");
        }

        Ok(Some(Self::Render {
          query: args[1..].join(" "),
        }))
      }
      _ => Ok(None),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Result<Option<Command>> {
    Command::parse(
      &args.iter().map(ToString::to_string).collect::<Vec<_>>(),
    )
  }

  #[test]
  fn index_requires_a_path() {
    let error = parse(&["index"]).unwrap_err();

    assert!(error.to_string().contains("requires a path"));
  }

  #[test]
  fn index_accepts_an_optional_discount() {
    let Some(Command::Index { discount, path }) = parse(&[
      "index",
      "data/products.json",
      "Cameras & Camcorders",
      "20",
    ])
    .unwrap() else {
      panic!("expected an index command");
    };

    assert_eq!(path, Path::new("data/products.json"));

    let discount = discount.unwrap();

    assert_eq!(discount.category, "Cameras & Camcorders");
    assert!((discount.percent - 20.0).abs() < 1e-9);
  }

  #[test]
  fn index_rejects_a_partial_discount() {
    let error =
      parse(&["index", "data/products.json", "Cameras & Camcorders"])
        .unwrap_err();

    assert!(error.to_string().contains("category and a percent"));
  }

  #[test]
  fn index_rejects_a_non_numeric_percent() {
    let error =
      parse(&["index", "data/products.json", "Cables", "plenty"])
        .unwrap_err();

    assert!(error.to_string().contains("must be a number"));
  }

  #[test]
  fn render_requires_a_query() {
    let error = parse(&["render"]).unwrap_err();

    assert!(error.to_string().contains("render requires a query"));
  }

  #[test]
  fn render_joins_query_words() {
    let Some(Command::Render { query }) =
      parse(&["render", "mirrorless", "camera"]).unwrap()
    else {
      panic!("expected a render command");
    };

    assert_eq!(query, "mirrorless camera");
  }

  #[test]
  fn unknown_commands_fall_through_to_usage() {
    assert!(parse(&[]).unwrap().is_none());
    assert!(parse(&["bogus"]).unwrap().is_none());
  }
}
