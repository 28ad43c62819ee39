pub mod controller;
pub mod db;
pub mod error;
pub mod record;
pub mod store;
