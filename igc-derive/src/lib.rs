// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for fixed-column IGC record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too.
//!
//! # Example
//!
//! Deriving an implementation on a B record:
//!
//! ```ignore
//! #[derive(Record)]
//! #[igc(min_length = 25)]  // Shorter lines are truncated records
//! pub struct Fix<'a> {
//!     #[igc(field = 2)]  // Jump to absolute column 2
//!     pub time: Time<'a>,
//!     pub latitude: Latitude<'a>,
//!     pub longitude: Longitude<'a>,
//!     pub validity: Validity,
//!     pub pressure_altitude: Option<Altitude<'a>>,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

enum FieldAttribute {
    Position(usize),
}

fn int_literal(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int_lit),
            ..
        }) => int_lit.base10_parse::<usize>().ok(),
        _ => None,
    }
}

fn igc_attributes(attrs: &[Attribute]) -> impl Iterator<Item = Meta> + '_ {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("igc"))
        .filter_map(|attr| attr.parse_args::<Meta>().ok())
}

fn parse_field_attributes(field: &syn::Field) -> Option<FieldAttribute> {
    for meta in igc_attributes(&field.attrs) {
        match meta {
            // Handle #[igc(field = n)]
            Meta::NameValue(nv) if nv.path.is_ident("field") => {
                if let Some(n) = int_literal(&nv.value) {
                    return Some(FieldAttribute::Position(n));
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns the expression of `#[igc(min_length = ...)]` on the struct.
fn parse_min_length(input: &DeriveInput) -> Option<Expr> {
    igc_attributes(&input.attrs).find_map(|meta| match meta {
        Meta::NameValue(nv) if nv.path.is_ident("min_length") => Some(nv.value),
        _ => None,
    })
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&[u8]>`
/// implementation. Without `#[igc(min_length = n)]` the record must at least
/// hold its record type byte.
#[proc_macro_derive(Record, attributes(igc))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Extract lifetime parameter (should be 'a)
    let lifetime = generics
        .lifetimes()
        .next()
        .expect("Record types must have a lifetime parameter (e.g., 'a)");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Record derive only supports structs with named fields"),
        },
        _ => panic!("Record derive only supports structs"),
    };

    let min_length = parse_min_length(&input).map_or_else(|| quote! { 1 }, |e| quote! { #e });

    // Generate field parsing code
    let mut field_parsers = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().unwrap();

        let parse_expr = match parse_field_attributes(field) {
            Some(FieldAttribute::Position(pos)) => {
                quote! {
                    #field_name: fields.get(#pos)?
                }
            }
            None => {
                quote! {
                    #field_name: fields.next()?
                }
            }
        };

        field_parsers.push(parse_expr);
    }

    let expanded = quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            const MIN_LENGTH: usize = #min_length;

            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    };

    TokenStream::from(expanded)
}
