pub mod assessment;
pub mod document;
