pub mod add;
pub mod doctor;
pub mod script;
