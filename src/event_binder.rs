use super::*;

pub(crate) trait EventBinder {
  fn bind(&self, kind: EventKind, hit: &SearchHit, label: &str) -> String;
}

impl<F> EventBinder for F
where
  F: Fn(EventKind, &SearchHit, &str) -> String,
{
  fn bind(&self, kind: EventKind, hit: &SearchHit, label: &str) -> String {
    self(kind, hit, label)
  }
}
