//! Beer inventory: entity, wire DTO, mapping, persistence port and the
//! read/create/update operations built on them.

pub mod domain;
pub mod dto;
pub mod errors;
pub mod loader;
pub mod mapper;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::BeerService;
