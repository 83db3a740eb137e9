mod task_input;
mod task_list;
mod task_list_row;
mod view_tab_button;
mod view_tabs;
mod warning_dialog;

pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use view_tab_button::ViewTabButton;
pub use view_tabs::ViewTabs;
pub use warning_dialog::WarningDialog;
