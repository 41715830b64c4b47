//! Stylesheet injection.

use parking_lot::Mutex;

use crate::descriptor::AnimationDescriptor;

/// Destination for generated CSS.
///
/// Implemented by whatever owns the document stylesheet; each call carries
/// one self-contained block of rules.
pub trait StyleSink {
	/// Appends `css` to the document.
	fn inject(&self, css: String);
}

impl<S: StyleSink + ?Sized> StyleSink for &S {
	fn inject(&self, css: String) {
		(**self).inject(css);
	}
}

/// Sink that records injected blocks in order.
#[derive(Debug, Default)]
pub struct MemoryStyleSheet {
	blocks: Mutex<Vec<String>>,
}

impl MemoryStyleSheet {
	/// Creates an empty sheet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Blocks injected so far.
	pub fn blocks(&self) -> Vec<String> {
		self.blocks.lock().clone()
	}

	/// All blocks joined by newlines.
	pub fn contents(&self) -> String {
		self.blocks.lock().join("\n")
	}
}

impl StyleSink for MemoryStyleSheet {
	fn inject(&self, css: String) {
		self.blocks.lock().push(css);
	}
}

/// Injects `descriptor`'s keyframes bound to `selector`.
pub fn attach_to_selector<S: StyleSink + ?Sized>(sink: &S, selector: &str, descriptor: &AnimationDescriptor) {
	attach_to_selectors(sink, &[selector], descriptor);
}

/// Injects `descriptor`'s keyframes bound to a comma-joined selector group.
pub fn attach_to_selectors<S: StyleSink + ?Sized>(sink: &S, selectors: &[&str], descriptor: &AnimationDescriptor) {
	sink.inject(descriptor.selector_stylesheet(selectors));
}

/// Injects `descriptor`'s keyframes bound to its scope class and returns
/// the class name to put on elements.
pub fn attach_default<S: StyleSink + ?Sized>(sink: &S, descriptor: &AnimationDescriptor) -> String {
	sink.inject(descriptor.class_stylesheet());
	descriptor.style_scope_id().to_string()
}
