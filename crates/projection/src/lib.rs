//! Growth projection engine — month-by-month traffic, order, and revenue
//! forecasting for a paid + organic acquisition mix.

pub mod engine;
pub mod types;

pub use engine::{calculate_monthly_projection, generate_series};
pub use types::{
    MonthlyProjection, ProjectionInput, ProjectionReport, ProjectionSummary, WindowSummary,
};
