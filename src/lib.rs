//! phonebook - a small phonebook REST service backed by a document store

pub mod cli;
pub mod http;
pub mod person;
pub mod store;
