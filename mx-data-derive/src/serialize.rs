use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::element::{value_marker, Content, Element, Inner, InnerKind};

pub fn derive_element(input: &Element) -> TokenStream {
	let Element { ident, tag, mx_data_crate, .. } = input;

	let (has_attributes, stream_attributes) = match &input.attributes {
		Some(field) => {
			let field = &field.ident;
			(
				quote!(#mx_data_crate::serializer::Attributes::has_attributes(&self.#field)),
				quote!(#mx_data_crate::serializer::Attributes::stream_attributes(&self.#field, out)),
			)
		},
		None => (quote!(false), quote!(let _ = out; Ok(()))),
	};

	let (has_contents, stream_contents) = match &input.content {
		Content::Empty => (
			quote!(false),
			quote! {
				let _ = (out, indent);
				*is_one_line_only = true;
				Ok(())
			},
		),
		Content::Value(field) => {
			let field_ident = &field.ident;
			let ty = &field.ty;
			let marker = value_marker(field.is_string);
			let text = quote_spanned! {field.span=>
				<#mx_data_crate::serializer::#marker as #mx_data_crate::serializer::Value<#ty>>::serialize_value(&self.#field_ident)
			};
			(
				quote!(!#text.is_empty()),
				quote! {
					let _ = indent;
					*is_one_line_only = true;
					out.text(&#text)
				},
			)
		},
		Content::Children(fields) => {
			let has = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned!(field.span=> #mx_data_crate::serializer::Inner::has_contents(&self.#field_ident))
			});
			let stream = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned! {field.span=>
					#mx_data_crate::serializer::Inner::stream_inner(&self.#field_ident, out, indent + 1)?;
				}
			});
			(
				quote!(false #(|| #has)*),
				quote! {
					if !#mx_data_crate::serializer::Element::has_contents(self) {
						*is_one_line_only = true;
						return Ok(());
					}
					#(#stream)*
					*is_one_line_only = false;
					Ok(())
				},
			)
		},
	};

	quote! {
		impl #mx_data_crate::FixedElement for #ident {
			const TAG: &'static str = #tag;
		}

		impl #mx_data_crate::serializer::Element for #ident {
			fn has_attributes(&self) -> bool {
				#has_attributes
			}

			fn has_contents(&self) -> bool {
				#has_contents
			}

			fn stream_attributes(&self, out: &mut #mx_data_crate::serializer::Stream<'_>) -> #mx_data_crate::Result<()> {
				#stream_attributes
			}

			fn stream_contents(
				&self,
				out: &mut #mx_data_crate::serializer::Stream<'_>,
				indent: usize,
				is_one_line_only: &mut bool,
			) -> #mx_data_crate::Result<()> {
				#stream_contents
			}
		}
	}
}

pub fn derive_inner(input: &Inner) -> TokenStream {
	let Inner { ident, mx_data_crate, kind } = input;

	let (has_contents, stream_inner) = match kind {
		InnerKind::Group(fields) => {
			let has = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned!(field.span=> #mx_data_crate::serializer::Inner::has_contents(&self.#field_ident))
			});
			let stream = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned! {field.span=>
					#mx_data_crate::serializer::Inner::stream_inner(&self.#field_ident, out, indent)?;
				}
			});
			(quote!(false #(|| #has)*), quote!(#(#stream)* Ok(())))
		},
		InnerKind::Choice(variants) => {
			let has = variants.iter().map(|variant| {
				let variant_ident = &variant.ident;
				quote_spanned! {variant.span=>
					Self::#variant_ident(inner) => #mx_data_crate::serializer::Inner::has_contents(inner),
				}
			});
			let stream = variants.iter().map(|variant| {
				let variant_ident = &variant.ident;
				quote_spanned! {variant.span=>
					Self::#variant_ident(inner) => #mx_data_crate::serializer::Inner::stream_inner(inner, out, indent),
				}
			});
			(quote!(match self { #(#has)* }), quote!(match self { #(#stream)* }))
		},
	};

	quote! {
		impl #mx_data_crate::serializer::Inner for #ident {
			fn has_contents(&self) -> bool {
				#has_contents
			}

			fn stream_inner(&self, out: &mut #mx_data_crate::serializer::Stream<'_>, indent: usize) -> #mx_data_crate::Result<()> {
				#stream_inner
			}
		}
	}
}
