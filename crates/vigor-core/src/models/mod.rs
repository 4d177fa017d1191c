pub mod classification;
pub mod history;
pub mod measurements;
pub mod patient;
pub mod protocol;
pub mod result;
