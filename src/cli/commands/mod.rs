pub mod print;
pub mod track;
