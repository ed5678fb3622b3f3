pub mod controls;
pub mod legend;
