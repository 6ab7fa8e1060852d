use super::*;

const CART_LABEL: &str = "PLP: Product Added to Cart";

const CLICK_LABEL: &str = "PLP: Product Clicked";

// The name arrives pre-highlighted from the search service and the image and
// price are trusted upstream values, so nothing here is escaped.
pub(crate) fn render(hit: &SearchHit, bind_event: &dyn EventBinder) -> String {
  format!(
    r#"<a class="result-hit">
  <div class="result-hit__image-container">
    <img class="result-hit__image" src="{image}" />
  </div>
  <div class="result-hit__details">
    <h3 class="result-hit__name">{name}</h3>
    <p class="result-hit__price">${price}</p>
  </div>
  <div class="result-hit__controls">
    <button {view} id="view-item" class="result-hit__view">View</button>
    <button {cart} id="add-to-cart" class="result-hit__cart">Add To Cart</button>
  </div>
</a>"#,
    image = hit.image,
    name = hit.highlight_result.name.value,
    price = hit.price,
    view = bind_event.bind(EventKind::Click, hit, CLICK_LABEL),
    cart = bind_event.bind(EventKind::Conversion, hit, CART_LABEL),
  )
}
