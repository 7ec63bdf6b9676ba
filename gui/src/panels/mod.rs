mod actions;
mod element_list;
mod header;
mod input_bar;
mod status_bar;

pub use actions::ActionsPanel;
pub use element_list::ElementListPanel;
pub use header::HeaderPanel;
pub use input_bar::InputBarPanel;
pub use status_bar::StatusBarPanel;
