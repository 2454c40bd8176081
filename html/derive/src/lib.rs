//! Derive macro for HTML elements.
//!
//! `#[derive(HtmlElement)]` implements `html_elements::HtmlElement` for a
//! struct, using the lowercased struct name as the tag name. The struct must
//! also implement `html_elements::HtmlContent`.
//!
//! ## Examples
//!
//! ```ignore
//! use html_elements::{HtmlContent, HtmlElement};
//!
//! #[derive(HtmlElement)]
//! pub struct H2 {
//!     heading: String,
//! }
//!
//! impl HtmlContent for H2 {
//!     fn get_content(&self) -> String {
//!         self.heading.clone()
//!     }
//! }
//!
//! assert_eq!(H2::start_tag(), "<h2>");
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result, parse2};

/// Derives `HtmlElement` with tags named after the type.
#[proc_macro_derive(HtmlElement)]
pub fn html_element_derive(input: TokenStream) -> TokenStream {
    match html_element_inner(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn html_element_inner(input: TokenStream2) -> Result<TokenStream2> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    match &input.data {
        Data::Struct(_) => {}
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                name,
                "HtmlElement cannot be derived on enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                name,
                "HtmlElement cannot be derived on unions",
            ));
        }
    }

    let tag = name.to_string().to_lowercase();
    let start_tag = format!("<{tag}>");
    let end_tag = format!("</{tag}>");
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::html_elements::HtmlElement for #name #ty_generics #where_clause {
            fn start_tag() -> String {
                #start_tag.to_string()
            }

            fn end_tag() -> String {
                #end_tag.to_string()
            }
        }
    })
}
