use proc_macro::TokenStream;
use quote::{
	ToTokens, quote,
};
use proc_macro2::{Ident, Span};


pub fn auto_service(_attr: TokenStream, body: TokenStream) -> TokenStream {
	let input = match syn::parse::<syn::ItemStruct>(body) {
		Ok(input) => input,
		Err(error) => return error.to_compile_error().into(),
	};

	if !input.generics.params.is_empty() {
		return syn::Error::new_spanned(
			&input.generics,
			"#[auto_service] requires a concrete type; generic services have no single registry identity",
		).to_compile_error().into();
	}

	let ident = input.ident.clone();
	let ident_str = ident.to_string();
	let construct_ident = Ident::new(&format!("AUTO_SERVICE_CONSTRUCT__{}", &ident_str), Span::call_site());
	let entry_ident = Ident::new(&format!("AUTO_SERVICE__{}", &ident_str), Span::call_site());
	let body = input.into_token_stream();

	// The construct fn is what enforces the `Default + Service` requirements:
	// a marked type missing either bound fails to compile here rather than
	// being skipped at runtime.
	return quote! {
		#body

		#[allow(nonstandard_style)]
		fn #construct_ident(registry: &mut service_locator::Registry) {
			registry.register::<#ident>(::std::boxed::Box::new(<#ident as ::core::default::Default>::default()));
		}

		#[allow(nonstandard_style)]
		#[linkme::distributed_slice(service_locator::DISCOVERED_SERVICES)]
		static #entry_ident: service_locator::DiscoveredService = service_locator::DiscoveredService {
			type_name: #ident_str,
			construct: #construct_ident,
		};
	}.into();
}
