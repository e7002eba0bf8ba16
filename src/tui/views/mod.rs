pub mod control_panel;
pub mod detail_modal;
pub mod guide;
