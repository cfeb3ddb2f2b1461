//! Portfolio module - derived-state recompute contract.

mod portfolio_traits;

pub use portfolio_traits::PortfolioServiceTrait;
