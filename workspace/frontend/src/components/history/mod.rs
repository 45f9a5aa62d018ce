pub mod charts;
pub mod stats;
pub mod table;
pub mod view;
