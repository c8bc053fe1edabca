use darling::{ast, FromDeriveInput, FromField};
use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Ident, Path, Type};

use crate::element::{as_ref_str, default_crate_path, kebab_case, option_inner, value_marker};

#[derive(FromField)]
#[darling(attributes(mx_data))]
struct AttributeFieldInput {
	ident: Option<Ident>,
	ty: Type,
	#[darling(default)]
	rename: Option<String>,
}

#[derive(FromDeriveInput)]
#[darling(attributes(mx_data), supports(struct_named, struct_unit))]
struct AttributesInput {
	ident: Ident,
	data: ast::Data<(), AttributeFieldInput>,
	#[darling(rename = "crate", default = "default_crate_path")]
	mx_data_crate: Path,
}

/// Single XML attribute
pub struct AttributeField {
	pub ident: Ident,
	pub key: String,
	/// Type of the value; `T` for fields of type `Option<T>`
	pub value_ty: Type,
	pub optional: bool,
	pub is_string: bool,
	span: Span,
}

/// Validated input for deriving `Attributes`
pub struct Attributes {
	pub ident: Ident,
	pub mx_data_crate: Path,
	pub fields: Vec<AttributeField>,
}

impl Attributes {
	pub fn from_derive_input(input: &syn::DeriveInput) -> darling::Result<Self> {
		let input = AttributesInput::from_derive_input(input)?;
		let mut errors = darling::Error::accumulator();
		let mut fields: Vec<AttributeField> = Vec::new();

		let raw_fields = match input.data {
			ast::Data::Struct(fields) => fields.fields,
			ast::Data::Enum(_) => return Err(darling::Error::unsupported_shape("enum")),
		};

		for field in raw_fields {
			let span = field.ty.span();
			let Some(ident) = field.ident else {
				errors.push(darling::Error::custom("fields must be named").with_span(&field.ty));
				continue;
			};
			let key = field.rename.unwrap_or_else(|| kebab_case(&ident));
			if fields.iter().any(|f| f.key == key) {
				errors.push(darling::Error::custom(format!("duplicate attribute key {:?}", key)).with_span(&ident));
			}
			let (value_ty, optional) = match option_inner(&field.ty) {
				Some(inner) => (inner.clone(), true),
				None => (field.ty, false),
			};
			let is_string = as_ref_str(&value_ty);
			fields.push(AttributeField { ident, key, value_ty, optional, is_string, span });
		}

		errors.finish()?;

		Ok(Self {
			ident: input.ident,
			mx_data_crate: input.mx_data_crate,
			fields,
		})
	}
}

fn serialize_field(field: &AttributeField, mx_data_crate: &Path) -> TokenStream {
	let AttributeField { ident, key, value_ty, .. } = field;
	let marker = value_marker(field.is_string);
	let value = quote!(<#mx_data_crate::serializer::#marker as #mx_data_crate::serializer::Value<#value_ty>>);

	if field.optional {
		quote_spanned! {field.span=>
			if let Some(value) = &self.#ident {
				out.attribute(#key, &#value::serialize_value(value))?;
			}
		}
	} else {
		quote_spanned! {field.span=>
			out.attribute(#key, &#value::serialize_value(&self.#ident))?;
		}
	}
}

fn parse_field(field: &AttributeField, mx_data_crate: &Path) -> TokenStream {
	let AttributeField { ident, key, value_ty, .. } = field;
	let marker = value_marker(field.is_string);
	let value = quote!(<#mx_data_crate::parser::#marker as #mx_data_crate::parser::Value<#value_ty>>);

	if field.optional {
		quote_spanned! {field.span=>
			self.#ident = None;
			if let Some(text) = node.attribute(#key) {
				match #value::parse_value(text) {
					Ok(value) => self.#ident = Some(value),
					Err(e) => ctx.invalid_attribute(#key, &e),
				}
			}
		}
	} else {
		quote_spanned! {field.span=>
			match node.attribute(#key) {
				Some(text) => match #value::parse_value(text) {
					Ok(value) => self.#ident = value,
					Err(e) => {
						ctx.invalid_attribute(#key, &e);
						ok = false;
					},
				},
				None => {
					ctx.missing_attribute(#key);
					ok = false;
				},
			}
		}
	}
}

pub fn derive_attributes(input: &Attributes) -> TokenStream {
	let Attributes { ident, mx_data_crate, fields } = input;

	let present = fields.iter().map(|field| {
		let ident = &field.ident;
		if field.optional {
			quote!(self.#ident.is_some())
		} else {
			quote!(true)
		}
	});
	let keys = fields.iter().map(|field| &field.key);
	let serialize_fields = fields.iter().map(|field| serialize_field(field, mx_data_crate));
	let parse_fields = fields.iter().map(|field| parse_field(field, mx_data_crate));
	let unused = if fields.is_empty() {
		quote!(let _ = (&out,);)
	} else {
		quote!()
	};
	let unused_parse = if fields.is_empty() {
		quote!(let _ = (&ctx, node);)
	} else {
		quote!()
	};

	quote! {
		impl #mx_data_crate::serializer::Attributes for #ident {
			fn has_attributes(&self) -> bool {
				false #(|| #present)*
			}

			fn stream_attributes(&self, out: &mut #mx_data_crate::serializer::Stream<'_>) -> #mx_data_crate::Result<()> {
				#unused
				#(#serialize_fields)*
				Ok(())
			}
		}

		impl #mx_data_crate::parser::Attributes for #ident {
			const KEYS: &'static [&'static str] = &[#(#keys),*];

			#[allow(unused_mut)]
			fn parse_attributes(
				&mut self,
				ctx: &mut #mx_data_crate::parser::ParseContext<'_>,
				node: &#mx_data_crate::parser::XElement,
			) -> bool {
				#unused_parse
				let mut ok = true;
				#(#parse_fields)*
				ok
			}
		}
	}
}
