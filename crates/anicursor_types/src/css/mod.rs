//! Stylesheet text for cursor animations.
//!
//! A decoded animation is exposed to the page as one `@keyframes` rule whose
//! steps switch the `cursor` property, plus rules binding selectors to it
//! with a stepped, infinitely looping `animation`.

pub mod keyframes;
pub mod naming;

pub use self::keyframes::{animation_rule, class_selector, render_keyframes};
pub use self::naming::{animation_name, sanitize, style_scope_id};
