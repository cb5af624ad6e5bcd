// src/core/mod.rs — Dashboard orchestration and view projections

pub mod dashboard;
pub mod presenter;
pub mod projections;

pub use dashboard::{Dashboard, DashboardState};
pub use presenter::{NoticeLevel, Presenter};
