use {super::*, anyhow::Context};

#[derive(Debug)]
pub(crate) struct Discount {
  pub(crate) category: String,
  pub(crate) percent: f64,
}

impl Discount {
  pub(crate) fn apply(&self, products: &mut [Product]) {
    for product in products {
      if product
        .categories
        .iter()
        .any(|category| *category == self.category)
      {
        product.price = discounted_price(product.price, self.percent);
      }
    }
  }
}

// Round to cents first, then floor to a whole amount, so a 20% cut off
// $49.99 lands on $39 rather than $39.992.
pub(crate) fn discounted_price(price: f64, percent: f64) -> f64 {
  let reduced = price * (1.0 - percent / 100.0);

  ((reduced * 100.0).round() / 100.0).floor()
}

pub(crate) fn load_products(path: &Path) -> Result<Vec<Product>> {
  let data = fs::read(path)
    .with_context(|| format!("could not read {}", path.display()))?;

  serde_json::from_slice(&data)
    .with_context(|| format!("could not parse products in {}", path.display()))
}
