extern crate proc_macro;
use proc_macro::TokenStream;

mod auto_service_macro;


/// Marks a struct as an auto-registrable service. The discovery phase
/// (`Registry::initialize`) constructs the type via `Default` and registers
/// it under its own identity. The type must implement `Service` and
/// `Default`.
#[proc_macro_attribute]
pub fn auto_service(attr: TokenStream, body: TokenStream) -> TokenStream {
    return auto_service_macro::auto_service(attr, body);
}
