use showcase_core::ProductCard;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::ProductCardView;

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
  pub cards: Vec<ProductCard>
}

#[function_component(ProductGrid)]
pub fn product_grid(
  props: &ProductGridProps
) -> Html {
  html! {
      <div class="products-grid">
          {
              for props.cards.iter().cloned().map(|card| {
                  let key = card.id;
                  html! { <ProductCardView key={key} card={card} /> }
              })
          }
      </div>
  }
}
