use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EventKind {
  Click,
  Conversion,
}

impl Display for EventKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Click => write!(f, "click"),
      Self::Conversion => write!(f, "conversion"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_wire_labels() {
    assert_eq!(EventKind::Click.to_string(), "click");
    assert_eq!(EventKind::Conversion.to_string(), "conversion");
  }
}
