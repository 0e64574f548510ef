//! Domain services for the temple tracker.

pub mod festival_service;
pub mod festival_table;
pub mod fund_service;
pub mod panchang;
pub mod tamil_calendar;

pub use festival_service::FestivalService;
pub use fund_service::FundService;
