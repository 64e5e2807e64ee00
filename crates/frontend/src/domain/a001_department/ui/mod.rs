pub mod keypad;
pub mod result_panel;
