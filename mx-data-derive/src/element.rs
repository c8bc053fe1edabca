use darling::{ast, util::Flag, FromDeriveInput, FromField, FromVariant};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, parse_quote, spanned::Spanned, Ident, Path, Type};

mod infer_type;

pub use self::infer_type::{as_ref_str, option_inner};

pub fn default_crate_path() -> Path {
	parse_quote!(::mx_data)
}

/// `PageMargins` -> `page-margins`, `default_x` -> `default-x`
pub fn kebab_case(ident: &Ident) -> String {
	let name = ident.unraw().to_string();
	let mut result = String::with_capacity(name.len() + 4);
	let mut prev_lower = false;
	for c in name.chars() {
		if c == '_' {
			result.push('-');
			prev_lower = false;
		} else if c.is_ascii_uppercase() {
			if prev_lower {
				result.push('-');
			}
			result.push(c.to_ascii_lowercase());
			prev_lower = false;
		} else {
			result.push(c);
			prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
		}
	}
	result
}

/// Marker type deciding how values are parsed and serialized.
///
/// The parser and serializer modules both have a `ValueString` and a `ValueDefault`.
pub fn value_marker(is_string: bool) -> TokenStream {
	if is_string {
		quote!(ValueString)
	} else {
		quote!(ValueDefault)
	}
}

#[derive(FromField)]
#[darling(attributes(mx_data))]
struct ElementFieldInput {
	ident: Option<Ident>,
	ty: Type,
	#[darling(default)]
	attributes: Flag,
	#[darling(default)]
	value: Flag,
}

#[derive(FromDeriveInput)]
#[darling(attributes(mx_data), supports(struct_named, struct_unit))]
struct ElementInput {
	ident: Ident,
	data: ast::Data<(), ElementFieldInput>,
	#[darling(default)]
	tag: Option<String>,
	#[darling(rename = "crate", default = "default_crate_path")]
	mx_data_crate: Path,
	#[darling(default)]
	ignore_unknown: Flag,
}

/// Field of a struct holding (some of) its child elements
pub struct ChildField {
	pub ident: Ident,
	pub ty: Type,
	pub span: Span,
}

/// Field holding the text value of an element
pub struct ValueField {
	pub ident: Ident,
	pub ty: Type,
	pub is_string: bool,
	pub span: Span,
}

/// Field holding the attribute container of an element
pub struct AttributesField {
	pub ident: Ident,
	pub ty: Type,
}

pub enum Content {
	Empty,
	Value(ValueField),
	Children(Vec<ChildField>),
}

/// Validated input for deriving `Element`
pub struct Element {
	pub ident: Ident,
	pub tag: String,
	pub mx_data_crate: Path,
	pub ignore_unknown: bool,
	pub attributes: Option<AttributesField>,
	pub content: Content,
}

fn named_fields<F>(data: ast::Data<(), F>) -> darling::Result<Vec<F>> {
	match data {
		ast::Data::Struct(fields) => Ok(fields.fields),
		ast::Data::Enum(_) => Err(darling::Error::unsupported_shape("enum")),
	}
}

fn field_ident(ident: Option<Ident>, ty: &Type) -> darling::Result<Ident> {
	ident.ok_or_else(|| darling::Error::custom("fields must be named").with_span(ty))
}

impl Element {
	pub fn from_derive_input(input: &syn::DeriveInput) -> darling::Result<Self> {
		let input = ElementInput::from_derive_input(input)?;
		let mut errors = darling::Error::accumulator();

		let mut attributes: Option<AttributesField> = None;
		let mut value: Option<ValueField> = None;
		let mut children = Vec::new();

		for field in named_fields(input.data)? {
			let span = field.ty.span();
			let Some(ident) = errors.handle(field_ident(field.ident, &field.ty)) else {
				continue;
			};
			if field.attributes.is_present() && field.value.is_present() {
				errors.push(darling::Error::custom("field can't be both attributes and value").with_span(&ident));
			} else if field.attributes.is_present() {
				if attributes.is_some() {
					errors.push(darling::Error::custom("only one attributes field allowed").with_span(&ident));
				}
				attributes = Some(AttributesField { ident, ty: field.ty });
			} else if field.value.is_present() {
				if value.is_some() {
					errors.push(darling::Error::custom("only one value field allowed").with_span(&ident));
				}
				let is_string = as_ref_str(&field.ty);
				value = Some(ValueField { ident, ty: field.ty, is_string, span });
			} else {
				children.push(ChildField { ident, ty: field.ty, span });
			}
		}

		let content = match value {
			Some(value) => {
				if let Some(child) = children.first() {
					errors.push(
						darling::Error::custom("value field excludes child element fields").with_span(&child.ident),
					);
				}
				Content::Value(value)
			},
			None if children.is_empty() => Content::Empty,
			None => Content::Children(children),
		};

		errors.finish()?;

		let tag = input.tag.unwrap_or_else(|| kebab_case(&input.ident));
		Ok(Self {
			ident: input.ident,
			tag,
			mx_data_crate: input.mx_data_crate,
			ignore_unknown: input.ignore_unknown.is_present(),
			attributes,
			content,
		})
	}
}

#[derive(FromField)]
#[darling(attributes(mx_data))]
struct InnerFieldInput {
	ident: Option<Ident>,
	ty: Type,
}

#[derive(FromVariant)]
#[darling(attributes(mx_data))]
struct InnerVariantInput {
	ident: Ident,
	fields: ast::Fields<InnerFieldInput>,
}

#[derive(FromDeriveInput)]
#[darling(attributes(mx_data), supports(struct_named, enum_newtype))]
struct InnerInput {
	ident: Ident,
	data: ast::Data<InnerVariantInput, InnerFieldInput>,
	#[darling(rename = "crate", default = "default_crate_path")]
	mx_data_crate: Path,
}

/// Alternative of a choice
pub struct ChoiceVariant {
	pub ident: Ident,
	pub ty: Type,
	pub span: Span,
}

pub enum InnerKind {
	/// All fields in sequence
	Group(Vec<ChildField>),
	/// Exactly one of the variants
	Choice(Vec<ChoiceVariant>),
}

/// Validated input for deriving `Inner`
pub struct Inner {
	pub ident: Ident,
	pub mx_data_crate: Path,
	pub kind: InnerKind,
}

impl Inner {
	pub fn from_derive_input(input: &syn::DeriveInput) -> darling::Result<Self> {
		let input = InnerInput::from_derive_input(input)?;
		let mut errors = darling::Error::accumulator();

		let kind = match input.data {
			ast::Data::Struct(fields) => {
				let mut children = Vec::new();
				for field in fields.fields {
					let span = field.ty.span();
					if let Some(ident) = errors.handle(field_ident(field.ident, &field.ty)) {
						children.push(ChildField { ident, ty: field.ty, span });
					}
				}
				if children.is_empty() {
					errors.push(darling::Error::custom("group needs at least one field").with_span(&input.ident));
				}
				InnerKind::Group(children)
			},
			ast::Data::Enum(variants) => {
				if variants.is_empty() {
					errors.push(darling::Error::custom("choice needs at least one variant").with_span(&input.ident));
				}
				let mut choices = Vec::new();
				for variant in variants {
					let span = variant.ident.span();
					match variant.fields.fields.into_iter().next() {
						Some(field) => choices.push(ChoiceVariant { ident: variant.ident, ty: field.ty, span }),
						None => errors
							.push(darling::Error::custom("variant needs exactly one field").with_span(&variant.ident)),
					}
				}
				InnerKind::Choice(choices)
			},
		};

		errors.finish()?;

		Ok(Self {
			ident: input.ident,
			mx_data_crate: input.mx_data_crate,
			kind,
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn kebab() {
		let cases: [(Ident, &str); 5] = [
			(parse_quote!(PageMargins), "page-margins"),
			(parse_quote!(default_x), "default-x"),
			(parse_quote!(r#type), "type"),
			(parse_quote!(Score), "score"),
			(parse_quote!(Direction2Type), "direction2-type"),
		];
		for (ident, expected) in cases {
			assert_eq!(kebab_case(&ident), expected);
		}
	}

	#[test]
	fn element_input() {
		let input: syn::DeriveInput = parse_quote! {
			#[mx_data(tag = "part-name")]
			struct PartName {
				#[mx_data(attributes)]
				attributes: PrintStyleAttributes,
				#[mx_data(value)]
				value: String,
			}
		};
		let element = Element::from_derive_input(&input).unwrap();
		assert_eq!(element.tag, "part-name");
		assert!(element.attributes.is_some());
		assert!(matches!(element.content, Content::Value(ValueField { is_string: true, .. })));

		let input: syn::DeriveInput = parse_quote! {
			struct Broken {
				#[mx_data(value)]
				value: String,
				child: Option<Other>,
			}
		};
		assert!(Element::from_derive_input(&input).is_err());
	}

	#[test]
	fn inner_input() {
		let input: syn::DeriveInput = parse_quote! {
			enum NoteChoice {
				Normal(NormalNote),
				Grace(GraceNote),
			}
		};
		let inner = Inner::from_derive_input(&input).unwrap();
		assert!(matches!(&inner.kind, InnerKind::Choice(variants) if variants.len() == 2));
	}
}
