use std::any::{
	Any,
	TypeId,
	type_name,
};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::services::contract::Service;
#[cfg(feature = "discovery")]
use crate::services::discovery::DISCOVERED_SERVICES;


/// An error returned from a `Registry` lookup call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetServiceError {
	#[error("{type_name} is not a registered service.")]
	NotFound { type_name: &'static str },
}


/// Maps service identities to live instances so decoupled subsystems can
/// find each other without direct references.
///
/// An entry's identity is the statically named type parameter at the call
/// site, never the instance's concrete type, so a concrete implementation
/// can be registered under a `dyn Trait` key and fetched through it:
///
/// ```ignore
/// registry.register::<dyn Audio>(Box::new(Mixer::new()));
/// let audio = registry.get::<dyn Audio>()?;
/// ```
///
/// Mutating operations take `&mut self`; a caller that needs cross-thread
/// access wraps the registry in a single lock.
pub struct Registry {
	services: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
	initialized: bool,
}

impl Registry {

	/// Creates an empty registry without running the discovery phase.
	pub fn new() -> Registry {
		return Registry {
			services: FxHashMap::default(),
			initialized: false,
		};
	}

	/// Creates a registry and runs the discovery phase: every type marked
	/// `#[auto_service]` anywhere in the program is constructed and
	/// registered under its own identity. Call this at the application
	/// entry point, before any code that could query the registry.
	pub fn initialize() -> Registry {
		let mut registry = Registry::new();
		registry.run_discovery();
		registry.initialized = true;
		return registry;
	}

	#[cfg(feature = "discovery")]
	fn run_discovery(&mut self) {
		for discovered in DISCOVERED_SERVICES.iter() {
			(discovered.construct)(self);
		}
	}

	#[cfg(not(feature = "discovery"))]
	fn run_discovery(&mut self) {}

	/// Whether the discovery phase has completed. `false` for registries
	/// built with `new`, for callers that must guard against querying too
	/// early in startup.
	pub fn is_initialized(&self) -> bool {
		return self.initialized;
	}

	/// Registers `service` under the identity `T`, then invokes its
	/// `on_registered` hook.
	///
	/// If an entry for `T` already exists the call is refused: the map is
	/// untouched, `service` is dropped without ever seeing `on_registered`,
	/// and the conflict is logged. Re-registering a key requires an
	/// intervening `unregister`.
	pub fn register<T>(&mut self, service: Box<T>)
	where
		T: Service + ?Sized + 'static,
	{
		let key = TypeId::of::<T>();

		if self.services.contains_key(&key) {
			log::error!(
				"Attempted to register service of type {} which has already been registered.",
				type_name::<T>(),
			);
			return;
		}

		self.services.insert(key, Box::new(service));
		if let Some(service) = self.services.get_mut(&key).and_then(|entry| entry.downcast_mut::<Box<T>>()) {
			service.on_registered();
		}
	}

	/// Invokes the registered instance's `on_unregistered` hook, then
	/// removes the entry for `T`.
	///
	/// If no entry for `T` exists the call is refused: the map is untouched
	/// and the miss is logged.
	pub fn unregister<T>(&mut self)
	where
		T: Service + ?Sized + 'static,
	{
		let key = TypeId::of::<T>();

		match self.services.get_mut(&key).and_then(|entry| entry.downcast_mut::<Box<T>>()) {
			Some(service) => service.on_unregistered(),
			None => {
				log::error!(
					"Attempted to unregister service of type {} which is not registered.",
					type_name::<T>(),
				);
				return;
			},
		}

		self.services.remove(&key);
	}

	/// Returns the instance registered under `T`, or
	/// `GetServiceError::NotFound` if there is none. Lookup failures are
	/// surfaced rather than swallowed because a caller unconditionally
	/// needs the instance it asked for; use `try_get` when absence is an
	/// expected outcome.
	pub fn get<T>(&self) -> Result<&T, GetServiceError>
	where
		T: Service + ?Sized + 'static,
	{
		match self.services.get(&TypeId::of::<T>()).and_then(|entry| entry.downcast_ref::<Box<T>>()) {
			Some(service) => Ok(&**service),
			None => Err(GetServiceError::NotFound { type_name: type_name::<T>() }),
		}
	}

	/// Mutable counterpart of `get`, for callers driving a stateful service.
	pub fn get_mut<T>(&mut self) -> Result<&mut T, GetServiceError>
	where
		T: Service + ?Sized + 'static,
	{
		match self.services.get_mut(&TypeId::of::<T>()).and_then(|entry| entry.downcast_mut::<Box<T>>()) {
			Some(service) => Ok(&mut **service),
			None => Err(GetServiceError::NotFound { type_name: type_name::<T>() }),
		}
	}

	/// Non-throwing lookup: `None` when no entry for `T` exists.
	pub fn try_get<T>(&self) -> Option<&T>
	where
		T: Service + ?Sized + 'static,
	{
		return self.get::<T>().ok();
	}

	/// Whether an entry for `T` currently exists.
	pub fn is_registered<T>(&self) -> bool
	where
		T: Service + ?Sized + 'static,
	{
		return self.services.contains_key(&TypeId::of::<T>());
	}

	/// The number of registered services.
	pub fn len(&self) -> usize {
		return self.services.len();
	}

	pub fn is_empty(&self) -> bool {
		return self.services.is_empty();
	}
}

impl Default for Registry {
	fn default() -> Registry {
		return Registry::new();
	}
}
