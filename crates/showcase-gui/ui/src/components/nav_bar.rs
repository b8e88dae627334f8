use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
  pub links_class:    &'static str,
  pub on_toggle_menu: Callback<()>,
  pub on_anchor:      Callback<String>
}

#[function_component(NavBar)]
pub fn nav_bar(
  props: &NavBarProps
) -> Html {
  let anchor = |href: &'static str,
                label: &'static str,
                class: &'static str| {
    let on_anchor =
      props.on_anchor.clone();
    html! {
        <a
            href={href}
            class={class}
            onclick={move |e: MouseEvent| {
                e.prevent_default();
                on_anchor.emit(href.to_string());
            }}
        >
            { label }
        </a>
    }
  };
  let on_toggle_menu =
    props.on_toggle_menu.clone();

  html! {
      <header class="site-header">
          <nav class="navbar">
              { anchor("#", "Showcase", "logo") }
              <ul class={props.links_class}>
                  <li>{ anchor("#todo", "To-Do", "nav-link") }</li>
                  <li>{ anchor("#products", "Products", "nav-link") }</li>
              </ul>
              <button
                  class="hamburger"
                  aria-label="Toggle navigation"
                  onclick={move |_| on_toggle_menu.emit(())}
              >
                  <i class="fas fa-bars"></i>
              </button>
          </nav>
      </header>
  }
}
