pub mod banner;
pub mod compose_panel;
pub mod protected;
pub mod result_panel;
