use tasklist_gui_shared::{
  TaskView,
  ViewTabDto
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::ViewTabButton;

#[derive(Properties, PartialEq)]
pub struct ViewTabsProps {
  pub tabs:      Vec<ViewTabDto>,
  pub on_select: Callback<TaskView>
}

#[function_component(ViewTabs)]
pub fn view_tabs(
  props: &ViewTabsProps
) -> Html {
  html! {
      <div class="view-tabs">
          {
              for props.tabs.iter().map(|tab| {
                  let view = tab.view;
                  let on_select = props.on_select.clone();
                  html! {
                      <ViewTabButton
                          label={tab.label.clone()}
                          count={tab.count}
                          is_active={tab.active}
                          onclick={Callback::from(move |_| on_select.emit(view))}
                      />
                  }
              })
          }
      </div>
  }
}
