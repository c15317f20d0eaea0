#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod validation;
pub mod model;
pub mod pairing;
pub mod db;
pub mod ops;
pub mod queries;
pub mod cli;
