use showcase_core::{
  Category,
  CategoryFilter,
  SortKey
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CatalogControlsProps {
  pub category:           CategoryFilter,
  pub sort:               SortKey,
  pub on_category_change:
    Callback<web_sys::Event>,
  pub on_sort_change:
    Callback<web_sys::Event>
}

#[function_component(CatalogControls)]
pub fn catalog_controls(
  props: &CatalogControlsProps
) -> Html {
  html! {
      <div class="product-filters">
          <div class="filter-group">
              <label for="category-filter">{ "Category" }</label>
              <select
                  id="category-filter"
                  value={props.category.as_key()}
                  onchange={props.on_category_change.clone()}
              >
                  <option value="all" selected={props.category == CategoryFilter::All}>
                      { "All" }
                  </option>
                  {
                      for Category::ALL.into_iter().map(|category| html! {
                          <option
                              value={category.as_key()}
                              selected={props.category == CategoryFilter::Only(category)}
                          >
                              { category.label() }
                          </option>
                      })
                  }
              </select>
          </div>
          <div class="filter-group">
              <label for="sort">{ "Sort by" }</label>
              <select
                  id="sort"
                  value={props.sort.as_key()}
                  onchange={props.on_sort_change.clone()}
              >
                  {
                      for SortKey::ALL.into_iter().map(|sort| html! {
                          <option value={sort.as_key()} selected={props.sort == sort}>
                              { sort.label() }
                          </option>
                      })
                  }
              </select>
          </div>
      </div>
  }
}
