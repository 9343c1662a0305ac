//! Salary Statement Engine
//!
//! This crate fetches the salary records of a pay period from an HR API and
//! renders one single-page PDF salary statement per employee.
//!
//! The pieces are layered:
//! - [`calculation`] derives totals, labels and display strings from a record
//! - [`render`] lays a statement out on any [`render::DrawingSurface`]
//! - [`batch`] drives a whole pay period, one record at a time
//! - [`api`] talks to the HR API

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
