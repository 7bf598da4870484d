pub mod annotate;
pub mod objects;
pub mod protected;
