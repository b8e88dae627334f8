use showcase_core::{
  TaskId,
  TaskRow
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TodoRowProps {
  pub row:       TaskRow,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TodoRow)]
pub fn todo_row(
  props: &TodoRowProps
) -> Html {
  let id = props.row.id;
  let on_check =
    props.on_toggle.clone();
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <li class={props.row.row_class}>
          <input
              type="checkbox"
              checked={props.row.completed}
              onchange={move |_| on_check.emit(id)}
          />
          <span class="todo-text">{ &props.row.text }</span>
          <div class="todo-actions">
              <button class="complete-btn" onclick={move |_| on_toggle.emit(id)}>
                  <i class={props.row.toggle_icon}></i>
              </button>
              <button class="delete-btn" onclick={move |_| on_delete.emit(id)}>
                  <i class={props.row.delete_icon}></i>
              </button>
          </div>
      </li>
  }
}
