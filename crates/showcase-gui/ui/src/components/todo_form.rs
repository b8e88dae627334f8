use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoFormProps {
  /// Returns whether the text was accepted.
  pub on_add: Callback<String, bool>
}

#[function_component(TodoForm)]
pub fn todo_form(
  props: &TodoFormProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    move |e: web_sys::InputEvent| {
      if let Some(input) = e
        .target_dyn_into::<
          web_sys::HtmlInputElement
        >()
      {
        draft.set(input.value());
      }
    }
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    move |e: web_sys::SubmitEvent| {
      e.prevent_default();
      if on_add.emit((*draft).clone()) {
        draft.set(String::new());
      }
    }
  };

  html! {
      <form class="todo-form" onsubmit={on_submit}>
          <input
              class="todo-input"
              type="text"
              placeholder="Add a new task..."
              value={(*draft).clone()}
              oninput={on_input}
          />
          <button type="submit" class="todo-add">
              <i class="fas fa-plus"></i>
          </button>
      </form>
  }
}
