// Exam schema engine: keyword classification over a fixed requirement catalog.
// Handlers only talk to the `SchemaGenerator` trait, never to the catalog directly.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod matcher;
pub mod models;
