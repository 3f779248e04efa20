use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `vc_mapping` crate.
///
/// Crates depending on `vc_mapping` get `::vc_mapping`, crates depending
/// on the `vc_flat` facade get `::vc_flat::mapping`.
///
/// Scanning the manifest is not cheap, so the path is obtained once per
/// expansion and passed around.
pub(crate) fn vc_mapping() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_mapping"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn type_shape_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::TypeShape }
}

#[inline(always)]
pub(crate) fn shape_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::Shape }
}

#[inline(always)]
pub(crate) fn flatten_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::Flatten }
}

#[inline(always)]
pub(crate) fn flat_ref_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::FlatRef }
}

#[inline(always)]
pub(crate) fn record_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::Record }
}

#[inline(always)]
pub(crate) fn unflatten_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::shape::Unflatten }
}

#[inline(always)]
pub(crate) fn record_reader_(vc_mapping_path: &syn::Path) -> TokenStream {
    quote! { #vc_mapping_path::engine::RecordReader }
}
