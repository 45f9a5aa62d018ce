pub mod history;
pub mod layout;
