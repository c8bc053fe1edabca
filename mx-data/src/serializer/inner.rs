use crate::{
	serializer::{
		Element,
		Stream,
	},
	Result,
};

/// Convenience interface to serialize collections of elements
pub trait Inner {
	/// Whether `stream_inner` writes any element
	fn has_contents(&self) -> bool;

	/// Write all contained elements, each on a new line at indentation `indent`
	fn stream_inner(&self, out: &mut Stream<'_>, indent: usize) -> Result<()>;
}

/// Simply serialize the element
impl<E: Element> Inner for E {
	fn has_contents(&self) -> bool {
		true
	}

	fn stream_inner(&self, out: &mut Stream<'_>, indent: usize) -> Result<()> {
		out.newline()?;
		self.to_stream(out, indent)
	}
}

/// Serialize inner data if present
impl<I: Inner> Inner for Option<I> {
	fn has_contents(&self) -> bool {
		self.as_ref().map_or(false, Inner::has_contents)
	}

	fn stream_inner(&self, out: &mut Stream<'_>, indent: usize) -> Result<()> {
		if let Some(i) = self {
			i.stream_inner(out, indent)?;
		}
		Ok(())
	}
}

/// Serialize all inner data
impl<I: Inner> Inner for Vec<I> {
	fn has_contents(&self) -> bool {
		self.iter().any(Inner::has_contents)
	}

	fn stream_inner(&self, out: &mut Stream<'_>, indent: usize) -> Result<()> {
		for i in self {
			i.stream_inner(out, indent)?;
		}
		Ok(())
	}
}
