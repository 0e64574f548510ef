//! # Temple Tracker Backend
//!
//! Domain services for the temple administration application: Tamil calendar
//! resolution, festival lookup, and fund allocation bookkeeping. The REST
//! layer and persistence store live outside this crate. Everything here is
//! synchronous; calendar resolution is side-effect free, and the fund ledger
//! is the only piece of mutable state.

pub mod domain;

use std::sync::Arc;

use shared::GeoLocation;

use domain::panchang::PanchangProvider;
pub use domain::{FestivalService, FundService};

/// Main backend struct that wires the domain services together.
pub struct Backend {
    pub festival_service: FestivalService,
    pub fund_service: FundService,
}

impl Backend {
    /// Backend using the approximate Tamil date conversion.
    pub fn new() -> Self {
        Self {
            festival_service: FestivalService::approximate(),
            fund_service: FundService::new(),
        }
    }

    /// Backend resolving dates through an external panchang provider.
    pub fn with_panchang_provider(
        provider: Arc<dyn PanchangProvider>,
        location: GeoLocation,
    ) -> Self {
        Self {
            festival_service: FestivalService::accurate(provider, location),
            fund_service: FundService::new(),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
