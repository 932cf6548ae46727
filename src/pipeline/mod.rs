pub mod domain;
pub mod emergency;
pub mod gate;
pub mod greeting;
pub mod medicine;
pub mod patterns;
pub mod scoring;
