pub mod report;
pub mod track;
