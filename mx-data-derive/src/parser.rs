use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::element::{value_marker, Content, Element, Inner, InnerKind};

pub fn derive_element(input: &Element) -> TokenStream {
	let Element { ident, mx_data_crate, ignore_unknown, .. } = input;

	let parse_attributes = match &input.attributes {
		Some(field) => {
			let field_ident = &field.ident;
			let ty = &field.ty;
			quote! {
				let ok = #mx_data_crate::parser::Attributes::parse_attributes(&mut self.#field_ident, ctx, node);
				ctx.check_attributes(node, <#ty as #mx_data_crate::parser::Attributes>::KEYS, #ignore_unknown);
				ok
			}
		},
		None => quote! {
			ctx.check_attributes(node, &[], #ignore_unknown);
			true
		},
	};

	let parse_contents = match &input.content {
		Content::Empty => quote! {
			ctx.check_text(node, #ignore_unknown);
			ctx.check_no_children(node, #ignore_unknown);
			true
		},
		Content::Value(field) => {
			let field_ident = &field.ident;
			let ty = &field.ty;
			let marker = value_marker(field.is_string);
			quote_spanned! {field.span=>
				ctx.check_no_children(node, #ignore_unknown);
				match <#mx_data_crate::parser::#marker as #mx_data_crate::parser::Value<#ty>>::parse_value(&node.text) {
					Ok(value) => {
						self.#field_ident = value;
						true
					},
					Err(e) => {
						ctx.invalid_text(&e);
						false
					},
				}
			}
		},
		Content::Children(fields) => {
			let types = fields.iter().map(|field| &field.ty);
			let parse = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned! {field.span=>
					ok &= #mx_data_crate::parser::Inner::parse_inner(&mut self.#field_ident, ctx, &mut children);
				}
			});
			quote! {
				ctx.check_text(node, #ignore_unknown);
				let mut children = #mx_data_crate::parser::Children::new(
					ctx,
					node,
					&|tag: &str| false #(|| <#types as #mx_data_crate::parser::Inner>::accepts(tag))*,
					#ignore_unknown,
				);
				let mut ok = true;
				#(#parse)*
				children.finish(ctx);
				ok
			}
		},
	};

	quote! {
		impl #mx_data_crate::parser::Element for #ident {
			fn parse_attributes(
				&mut self,
				ctx: &mut #mx_data_crate::parser::ParseContext<'_>,
				node: &#mx_data_crate::parser::XElement,
			) -> bool {
				#parse_attributes
			}

			fn parse_contents(
				&mut self,
				ctx: &mut #mx_data_crate::parser::ParseContext<'_>,
				node: &#mx_data_crate::parser::XElement,
			) -> bool {
				#parse_contents
			}
		}
	}
}

pub fn derive_inner(input: &Inner) -> TokenStream {
	let Inner { ident, mx_data_crate, kind } = input;
	let inner_trait = quote!(#mx_data_crate::parser::Inner);

	let body = match kind {
		InnerKind::Group(fields) => {
			let types: Vec<_> = fields.iter().map(|field| &field.ty).collect();
			let starts_with = fields.iter().map(|field| {
				let ty = &field.ty;
				quote! {
					if <#ty as #inner_trait>::starts_with(tag) {
						return true;
					}
					if !<#ty as #inner_trait>::is_optional() {
						return false;
					}
				}
			});
			let parse = fields.iter().map(|field| {
				let field_ident = &field.ident;
				quote_spanned! {field.span=>
					ok &= #inner_trait::parse_inner(&mut self.#field_ident, ctx, children);
				}
			});
			quote! {
				fn accepts(tag: &str) -> bool {
					false #(|| <#types as #inner_trait>::accepts(tag))*
				}

				fn starts_with(tag: &str) -> bool {
					#(#starts_with)*
					false
				}

				fn is_optional() -> bool {
					true #(&& <#types as #inner_trait>::is_optional())*
				}

				fn parse_inner(
					&mut self,
					ctx: &mut #mx_data_crate::parser::ParseContext<'_>,
					children: &mut #mx_data_crate::parser::Children<'_>,
				) -> bool {
					let mut ok = true;
					#(#parse)*
					ok
				}
			}
		},
		InnerKind::Choice(variants) => {
			let types: Vec<_> = variants.iter().map(|variant| &variant.ty).collect();
			let choice_name = ident.to_string();
			let pick = variants.iter().map(|variant| {
				let variant_ident = &variant.ident;
				let ty = &variant.ty;
				quote_spanned! {variant.span=>
					if <#ty as #inner_trait>::starts_with(tag) {
						let mut inner = <#ty as ::std::default::Default>::default();
						#inner_trait::parse_inner(&mut inner, ctx, children);
						*self = Self::#variant_ident(inner);
						return true;
					}
				}
			});
			let fallback = variants.iter().map(|variant| {
				let variant_ident = &variant.ident;
				let ty = &variant.ty;
				quote_spanned! {variant.span=>
					if <#ty as #inner_trait>::is_optional() {
						*self = Self::#variant_ident(::std::default::Default::default());
						return true;
					}
				}
			});
			quote! {
				fn accepts(tag: &str) -> bool {
					false #(|| <#types as #inner_trait>::accepts(tag))*
				}

				fn starts_with(tag: &str) -> bool {
					false #(|| <#types as #inner_trait>::starts_with(tag))*
				}

				fn is_optional() -> bool {
					false #(|| <#types as #inner_trait>::is_optional())*
				}

				fn parse_inner(
					&mut self,
					ctx: &mut #mx_data_crate::parser::ParseContext<'_>,
					children: &mut #mx_data_crate::parser::Children<'_>,
				) -> bool {
					let found = children.peek_tag();
					if let Some(tag) = found {
						#(#pick)*
					}
					#(#fallback)*
					ctx.missing_choice(#choice_name, found);
					false
				}
			}
		},
	};

	let default_impl = match kind {
		InnerKind::Choice(variants) => match variants.first() {
			Some(first) => {
				let first = &first.ident;
				quote! {
					impl ::std::default::Default for #ident {
						fn default() -> Self {
							Self::#first(::std::default::Default::default())
						}
					}
				}
			},
			None => quote!(),
		},
		InnerKind::Group(_) => quote!(),
	};

	quote! {
		#default_impl

		impl #inner_trait for #ident {
			#body
		}
	}
}
