use syn::{
	GenericArgument,
	PathArguments,
	PathSegment,
	Type,
};

/// Infer whether a type is likely `String`, which is parsed verbatim (`ValueString`).
pub fn as_ref_str(ty: &Type) -> bool {
	match selfless_last(ty) {
		Some(last) => last.ident == "String" && last.arguments.is_empty(),
		None => false,
	}
}

/// If a type appears to be `Option<T>` return `T`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
	let last = selfless_last(ty)?;
	if last.ident != "Option" {
		return None;
	}

	if let PathArguments::AngleBracketed(args) = &last.arguments {
		if args.args.len() != 1 {
			return None;
		}
		if let Some(GenericArgument::Type(inner)) = args.args.first() {
			return Some(inner);
		}
	}

	None
}

fn selfless_last(ty: &Type) -> Option<&PathSegment> {
	match ty {
		// types passed through `macro_rules!` arrive wrapped in an invisible group
		Type::Group(group) => selfless_last(&group.elem),
		Type::Path(ty) if ty.qself.is_none() => ty.path.segments.last(),
		_ => None,
	}
}
