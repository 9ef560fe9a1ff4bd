pub mod audit;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod pricing;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod signup;
pub mod state;
pub mod store;
