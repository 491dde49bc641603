// Mods
mod registry;
mod services;


// Re-exports
pub use registry::{
	GetServiceError,
	Registry,
};
pub use services::contract::Service;
#[cfg(feature = "discovery")]
pub use services::discovery::{
	DiscoveredService,
	DISCOVERED_SERVICES,
};

// Macros and macro re-exports
#[cfg(feature = "discovery")]
pub use service_locator_macros::auto_service;
