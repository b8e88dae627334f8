use showcase_core::Stars;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct RatingStarsProps {
  pub stars: Stars
}

#[function_component(RatingStars)]
pub fn rating_stars(
  props: &RatingStarsProps
) -> Html {
  html! {
      <div class="product-rating">
          {
              for props.stars.glyphs().map(|star| html! {
                  <i class={star.class()}></i>
              })
          }
      </div>
  }
}
