use showcase_core::TaskFilter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TodoFiltersProps {
  pub active:    TaskFilter,
  pub on_select: Callback<TaskFilter>
}

#[function_component(TodoFilters)]
pub fn todo_filters(
  props: &TodoFiltersProps
) -> Html {
  html! {
      <div class="todo-filters">
          {
              for TaskFilter::ALL.into_iter().map(|filter| {
                  let on_select = props.on_select.clone();
                  let class = if filter == props.active {
                      "todo-filter active"
                  } else {
                      "todo-filter"
                  };
                  html! {
                      <button
                          class={class}
                          data-filter={filter.as_key()}
                          onclick={move |_| on_select.emit(filter)}
                      >
                          { filter.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
