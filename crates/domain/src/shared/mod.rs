pub mod entity;
pub mod metadata;
