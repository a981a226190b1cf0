//! Core types and computations for the gestation dashboard.
//!
//! - `calculator`: pure date arithmetic and derived metrics
//! - `config`: reference dates and the baby-size table
//! - `render`: writes computed metrics into a `DashboardView`
//! - `navigation`: single-page section state machine

pub mod calculator;
pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod metrics;
pub mod navigation;
pub mod render;
pub mod size_table;
pub mod view;
