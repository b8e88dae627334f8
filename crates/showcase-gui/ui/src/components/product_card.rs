use showcase_core::ProductCard;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::RatingStars;

#[derive(Properties, PartialEq)]
pub struct ProductCardViewProps {
  pub card: ProductCard
}

#[function_component(ProductCardView)]
pub fn product_card_view(
  props: &ProductCardViewProps
) -> Html {
  let card = &props.card;

  html! {
      <div class="product-card">
          <div class="product-image">
              <img src={card.image} alt={card.name} />
          </div>
          <div class="product-info">
              <h3>{ card.name }</h3>
              <div class="product-price">{ &card.price }</div>
              <RatingStars stars={card.stars} />
              <span class="product-category">{ card.category }</span>
          </div>
      </div>
  }
}
