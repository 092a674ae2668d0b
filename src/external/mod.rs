pub mod ai_service;
pub mod analysis_provider;
