use gloo::console::log;
use showcase_core::catalog::{
  PRODUCTS,
  catalog_view
};
use showcase_core::{
  CategoryFilter,
  KeyValueRepository,
  MonotonicIds,
  Navigation,
  PageConfig,
  SortKey,
  TaskFilter,
  TaskId,
  TaskStore
};
use yew::{
  Callback,
  Html,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::browser::{
  BrowserClock,
  LocalStorage,
  element_offset_top,
  smooth_scroll_to
};
use crate::components::{
  CatalogControls,
  NavBar,
  ProductGrid,
  TodoFilters,
  TodoForm,
  TodoList
};

const PAGE_CONFIG_TOML: &str =
  include_str!("../assets/showcase.toml");

type BrowserTaskStore = TaskStore<
  KeyValueRepository<LocalStorage>,
  MonotonicIds<BrowserClock>
>;

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_page_config);
  let store = {
    let key = config.storage_key.clone();
    use_mut_ref(move || -> BrowserTaskStore {
      TaskStore::load(
        KeyValueRepository::new(
          LocalStorage,
          key
        ),
        MonotonicIds::new(BrowserClock)
      )
    })
  };
  let task_revision = use_state(|| 0_u64);
  let task_filter =
    use_state(TaskFilter::default);
  let category =
    use_state(CategoryFilter::default);
  let sort = use_state(SortKey::default);
  let nav = {
    let header_offset =
      config.header_offset;
    use_state(move || {
      Navigation::new(header_offset)
    })
  };

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  let on_add = {
    let store = store.clone();
    let task_revision =
      task_revision.clone();
    Callback::from(move |text: String| {
      let added =
        store.borrow_mut().add(&text);
      if added.is_some() {
        task_revision
          .set(*task_revision + 1);
      }
      added.is_some()
    })
  };

  let on_toggle = {
    let store = store.clone();
    let task_revision =
      task_revision.clone();
    Callback::from(move |id: TaskId| {
      if store.borrow_mut().toggle(id) {
        task_revision
          .set(*task_revision + 1);
      }
    })
  };

  let on_delete = {
    let store = store.clone();
    let task_revision =
      task_revision.clone();
    Callback::from(move |id: TaskId| {
      if store.borrow_mut().remove(id) {
        task_revision
          .set(*task_revision + 1);
      }
    })
  };

  let on_filter = {
    let task_filter = task_filter.clone();
    Callback::from(
      move |filter: TaskFilter| {
        tracing::debug!(%filter, "task filter selected");
        task_filter.set(filter);
      }
    )
  };

  let on_category_change = {
    let category = category.clone();
    Callback::from(
      move |e: web_sys::Event| {
        if let Some(select) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        {
          let value = select.value();
          category.set(
            value
              .parse()
              .unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to all categories");
                CategoryFilter::default()
              })
          );
        } else {
          tracing::warn!(
            "category change event had \
             non-select target"
          );
        }
      }
    )
  };

  let on_sort_change = {
    let sort = sort.clone();
    Callback::from(
      move |e: web_sys::Event| {
        if let Some(select) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        {
          let value = select.value();
          sort.set(
            value
              .parse()
              .unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to catalog order");
                SortKey::default()
              })
          );
        } else {
          tracing::warn!(
            "sort change event had \
             non-select target"
          );
        }
      }
    )
  };

  let on_toggle_menu = {
    let nav = nav.clone();
    Callback::from(move |()| {
      let mut next = *nav;
      next.toggle_menu();
      nav.set(next);
    })
  };

  let on_anchor = {
    let nav = nav.clone();
    Callback::from(
      move |href: String| {
        let mut next = *nav;
        if let Some(top) = next
          .scroll_request(
            &href,
            element_offset_top
          )
        {
          smooth_scroll_to(top);
          nav.set(next);
        }
      }
    )
  };

  let task_view = store.borrow().view(
    *task_filter,
    &config.empty_message
  );
  let cards = catalog_view(
    PRODUCTS,
    *category,
    *sort,
    &config.currency_symbol
  );

  html! {
      <>
          <NavBar
              links_class={nav.links_class()}
              on_toggle_menu={on_toggle_menu}
              on_anchor={on_anchor}
          />
          <main>
              <section id="todo" class="todo-section">
                  <h2>{ "To-Do List" }</h2>
                  <div class="todo-container">
                      <TodoForm on_add={on_add} />
                      <TodoFilters active={*task_filter} on_select={on_filter} />
                      <TodoList
                          view={task_view}
                          on_toggle={on_toggle}
                          on_delete={on_delete}
                      />
                  </div>
              </section>
              <section id="products" class="products-section">
                  <h2>{ "Products" }</h2>
                  <CatalogControls
                      category={*category}
                      sort={*sort}
                      on_category_change={on_category_change}
                      on_sort_change={on_sort_change}
                  />
                  <ProductGrid cards={cards} />
              </section>
          </main>
      </>
  }
}

fn load_page_config() -> PageConfig {
  match PageConfig::from_toml_str(
    PAGE_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        storage_key = %config.storage_key,
        header_offset = config.header_offset,
        "loaded page config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(?error, "failed to parse page config; using defaults");
      PageConfig::default()
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
