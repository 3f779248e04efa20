use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Type, WhereClause};

use crate::path;

// -----------------------------------------------------------------------------
// Parsed input

struct RecordField<'a> {
    ident: &'a Ident,
    name: LitStr,
    ty: &'a Type,
}

fn parse_fields(ast: &DeriveInput) -> syn::Result<Vec<RecordField<'_>>> {
    let data = match &ast.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`Record` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`Record` cannot be derived for unions",
            ));
        }
    };

    match &data.fields {
        Fields::Named(fields) => Ok(fields
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                let name = LitStr::new(&ident.unraw().to_string(), ident.span());
                Some(RecordField {
                    ident,
                    name,
                    ty: &field.ty,
                })
            })
            .collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
            fields,
            "`Record` requires named fields, tuple structs are not supported",
        )),
    }
}

fn check_generics(generics: &Generics) -> syn::Result<()> {
    match generics.lifetimes().next() {
        Some(lifetime) => Err(syn::Error::new_spanned(
            lifetime,
            "`Record` types must be `'static`, lifetime parameters are not supported",
        )),
        None => Ok(()),
    }
}

/// Adds `'static` to every type parameter and `bound` to every field type.
fn where_clause(
    generics: &Generics,
    fields: &[RecordField<'_>],
    bound: Option<&TokenStream>,
) -> WhereClause {
    let mut clause = generics.where_clause.clone().unwrap_or_else(|| WhereClause {
        where_token: Default::default(),
        predicates: Default::default(),
    });

    for param in generics.type_params() {
        let ident = &param.ident;
        clause.predicates.push(syn::parse_quote! { #ident: 'static });
    }

    if let Some(bound) = bound {
        for field in fields {
            let ty = field.ty;
            clause.predicates.push(syn::parse_quote! { #ty: #bound });
        }
    }

    clause
}

// -----------------------------------------------------------------------------
// Expansion

pub(crate) fn expand(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = parse_fields(ast)?;
    check_generics(&ast.generics)?;

    let vc_mapping_path = path::vc_mapping();

    let type_shape = impl_type_shape(ast, &fields, &vc_mapping_path);
    let flatten = impl_flatten(ast, &fields, &vc_mapping_path);
    let record = impl_record(ast, &fields, &vc_mapping_path);
    let unflatten = impl_unflatten(ast, &fields, &vc_mapping_path);

    Ok(quote! {
        #type_shape
        #flatten
        #record
        #unflatten
    })
}

fn impl_type_shape(
    ast: &DeriveInput,
    fields: &[RecordField<'_>],
    vc_mapping_path: &syn::Path,
) -> TokenStream {
    let type_shape_ = path::type_shape_(vc_mapping_path);
    let shape_ = path::shape_(vc_mapping_path);

    let ident = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let where_clause = where_clause(&ast.generics, fields, None);
    let names = fields.iter().map(|field| &field.name);

    quote! {
        impl #impl_generics #type_shape_ for #ident #ty_generics #where_clause {
            #[inline]
            fn shape() -> #shape_ {
                #shape_::Record
            }

            #[inline]
            fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    }
}

fn impl_flatten(
    ast: &DeriveInput,
    fields: &[RecordField<'_>],
    vc_mapping_path: &syn::Path,
) -> TokenStream {
    let flatten_ = path::flatten_(vc_mapping_path);
    let flat_ref_ = path::flat_ref_(vc_mapping_path);

    let ident = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let where_clause = where_clause(&ast.generics, fields, Some(&flatten_));

    quote! {
        impl #impl_generics #flatten_ for #ident #ty_generics #where_clause {
            #[inline]
            fn flat_ref(&self) -> #flat_ref_<'_> {
                #flat_ref_::Record(self)
            }
        }
    }
}

fn impl_record(
    ast: &DeriveInput,
    fields: &[RecordField<'_>],
    vc_mapping_path: &syn::Path,
) -> TokenStream {
    let flatten_ = path::flatten_(vc_mapping_path);
    let record_ = path::record_(vc_mapping_path);

    let ident = &ast.ident;
    let ident_str = LitStr::new(&ident.unraw().to_string(), ident.span());
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let where_clause = where_clause(&ast.generics, fields, Some(&flatten_));

    let field_len = fields.len();
    let indices = 0..field_len;
    let names = fields.iter().map(|field| &field.name);
    let name_arms = quote! { #(#indices => ::core::option::Option::Some(#names),)* };

    let field_arms = fields.iter().enumerate().map(|(index, field)| {
        let ident = field.ident;
        quote! { #index => ::core::option::Option::Some(&self.#ident as &dyn #flatten_), }
    });

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_ident(&self) -> &'static str {
                #ident_str
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&'static str> {
                match index {
                    #name_arms
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #flatten_> {
                match index {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn impl_unflatten(
    ast: &DeriveInput,
    fields: &[RecordField<'_>],
    vc_mapping_path: &syn::Path,
) -> TokenStream {
    let unflatten_ = path::unflatten_(vc_mapping_path);
    let record_reader_ = path::record_reader_(vc_mapping_path);

    let ident = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let where_clause = where_clause(&ast.generics, fields, Some(&unflatten_));

    let reader = if fields.is_empty() {
        quote! { _reader }
    } else {
        quote! { reader }
    };

    let zero_fields = fields.iter().map(|RecordField { ident, ty, .. }| {
        quote! { #ident: <#ty as #unflatten_>::zero(), }
    });

    let read_fields = fields.iter().map(|RecordField { ident, name, ty }| {
        quote! { #ident: #reader.field::<#ty>(#name), }
    });

    quote! {
        impl #impl_generics #unflatten_ for #ident #ty_generics #where_clause {
            fn zero() -> Self {
                Self { #(#zero_fields)* }
            }

            fn unflatten_record(#reader: &#record_reader_<'_>) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(Self { #(#read_fields)* })
            }
        }
    }
}
