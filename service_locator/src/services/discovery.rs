use linkme::distributed_slice;

use crate::registry::Registry;


/// One entry in the compile-time discovery table. `#[auto_service]` emits
/// these; applications can also append entries by hand for types whose
/// construction needs more than `Default`.
pub struct DiscoveredService {

	/// The marked type's name, for diagnostics.
	pub type_name: &'static str,

	/// Builds the service and registers it under its own identity.
	pub construct: fn(&mut Registry),
}

/// The discovery table walked once by `Registry::initialize`. Populated at
/// link time from every crate in the program; no ordering is promised
/// across entries.
#[distributed_slice]
pub static DISCOVERED_SERVICES: [DiscoveredService] = [..];
