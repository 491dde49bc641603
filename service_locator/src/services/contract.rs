/// The capability implemented by every registrable service.
///
/// The registry is the only caller of these hooks; services never invoke them
/// on each other. For any registered entry they run in strict pairing order,
/// `on_registered` then, later, `on_unregistered`, each exactly once.
///
/// `Send + Sync` is required so a registry full of services can be handed to
/// a lock by callers that need cross-thread access.
pub trait Service: Send + Sync {

	/// Invoked synchronously, immediately after the entry is inserted into
	/// the registry. Typical work here is subscribing to other services.
	fn on_registered(&mut self) {}

	/// Invoked synchronously, immediately *before* the entry is removed, so
	/// the service tears down while still in its registered state.
	fn on_unregistered(&mut self) {}
}
