use showcase_core::{
  TaskId,
  TaskListView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoRow;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub view:      TaskListView,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  match &props.view {
    | TaskListView::Empty { message } => {
      html! {
          <ul class="todo-list">
              <li class="todo-item" style="justify-content:center;">
                  { message }
              </li>
          </ul>
      }
    }
    | TaskListView::Rows(rows) => {
      html! {
          <ul class="todo-list">
              {
                  for rows.iter().cloned().map(|row| {
                      let key = row.id.0;
                      html! {
                          <TodoRow
                              key={key}
                              row={row}
                              on_toggle={props.on_toggle.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      }
                  })
              }
          </ul>
      }
    }
  }
}
