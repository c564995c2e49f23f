pub mod chip_row;
pub mod status_bar;
