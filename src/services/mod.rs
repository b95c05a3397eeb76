pub mod generation_service;
pub use generation_service::{GenerationError, GenerationOutcome, GenerationService};

pub mod generation_service_impl;
pub use generation_service_impl::SeaOrmGenerationService;
