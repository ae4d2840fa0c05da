// Menu action layer: turns console lines into registry and bank operations.

pub mod bank_menu;
pub mod input;
pub mod school_menu;

pub use bank_menu::run_bank_session;
pub use school_menu::run_school_menu;
