//! The cell abstraction and the built-in cell kinds.
//!
//! A cell is the visual unit rendering one row. Hosts hand cells out by reuse
//! identifier, so the library only ever sees them behind the erased
//! [`Cell`] trait object; configure callbacks recover the concrete type
//! through a checked downcast (see [`CellDescriptor`](crate::CellDescriptor)).
//!
//! Three built-in cells cover the common single-row layouts:
//!
//! - [`TextCell`] - a single text label
//! - [`SubtitleCell`] - a text label with a detail line beneath it
//! - [`ValueCell`] - a text label with a trailing detail value
//!
//! Custom cells only need to implement [`Cell`] and `Default` (the pool
//! builds fresh instances through `Default`).

use std::any::Any;
use std::fmt;

use rowkit_core::Color;

/// The erased handle for a reusable cell.
///
/// Hosts store and recycle cells behind this trait object. The `as_any`
/// methods support the checked downcast a configure callback performs to
/// recover the concrete cell type.
///
/// # Implementing
///
/// ```
/// use std::any::Any;
/// use rowkit::Cell;
///
/// #[derive(Default)]
/// struct BadgeCell {
///     count: u32,
/// }
///
/// impl Cell for BadgeCell {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
///
///     fn prepare_for_reuse(&mut self) {
///         self.count = 0;
///     }
/// }
/// ```
pub trait Cell: Any {
    /// This cell as `Any`, for checked downcasts.
    fn as_any(&self) -> &dyn Any;

    /// This cell as mutable `Any`, for checked downcasts.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Reset transient state before the cell is handed out again.
    ///
    /// Called by the pool on recycled instances, before the configure
    /// callback runs. The default does nothing.
    fn prepare_for_reuse(&mut self) {}
}

static_assertions::assert_obj_safe!(Cell);

/// A cell with a single text label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextCell {
    text: Option<String>,
    text_color: Option<Color>,
}

impl TextCell {
    /// Set the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The label text, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the label color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    /// The label color, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }
}

impl Cell for TextCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn prepare_for_reuse(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.as_deref().unwrap_or(""))
    }
}

/// A cell with a text label and a detail line beneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleCell {
    text: Option<String>,
    detail_text: Option<String>,
    text_color: Option<Color>,
    detail_text_color: Option<Color>,
}

impl SubtitleCell {
    /// Set the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The label text, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the detail line text.
    pub fn set_detail_text(&mut self, text: impl Into<String>) {
        self.detail_text = Some(text.into());
    }

    /// The detail line text, if set.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail_text.as_deref()
    }

    /// Set the label color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    /// The label color, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Set the detail line color.
    pub fn set_detail_text_color(&mut self, color: Color) {
        self.detail_text_color = Some(color);
    }

    /// The detail line color, if set.
    pub fn detail_text_color(&self) -> Option<Color> {
        self.detail_text_color
    }
}

impl Cell for SubtitleCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn prepare_for_reuse(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SubtitleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.text, &self.detail_text) {
            (Some(text), Some(detail)) => write!(f, "{text}\n  {detail}"),
            (Some(text), None) => write!(f, "{text}"),
            (None, Some(detail)) => write!(f, "\n  {detail}"),
            (None, None) => Ok(()),
        }
    }
}

/// A cell with a text label and a trailing detail value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueCell {
    text: Option<String>,
    detail_text: Option<String>,
    text_color: Option<Color>,
    detail_text_color: Option<Color>,
}

impl ValueCell {
    /// Set the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The label text, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the trailing detail value.
    pub fn set_detail_text(&mut self, text: impl Into<String>) {
        self.detail_text = Some(text.into());
    }

    /// The trailing detail value, if set.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail_text.as_deref()
    }

    /// Set the label color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    /// The label color, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Set the trailing detail value color.
    pub fn set_detail_text_color(&mut self, color: Color) {
        self.detail_text_color = Some(color);
    }

    /// The trailing detail value color, if set.
    pub fn detail_text_color(&self) -> Option<Color> {
        self.detail_text_color
    }
}

impl Cell for ValueCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn prepare_for_reuse(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.text, &self.detail_text) {
            (Some(text), Some(detail)) => write!(f, "{text} | {detail}"),
            (Some(text), None) => write!(f, "{text}"),
            (None, Some(detail)) => write!(f, "| {detail}"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cell_roundtrip() {
        let mut cell = TextCell::default();
        assert_eq!(cell.text(), None);

        cell.set_text("Hello");
        cell.set_text_color(Color::RED);
        assert_eq!(cell.text(), Some("Hello"));
        assert_eq!(cell.text_color(), Some(Color::RED));
    }

    #[test]
    fn test_prepare_for_reuse_clears_state() {
        let mut cell = SubtitleCell::default();
        cell.set_text("Title");
        cell.set_detail_text("Detail");
        cell.set_detail_text_color(Color::ORANGE);

        cell.prepare_for_reuse();
        assert_eq!(cell, SubtitleCell::default());
    }

    #[test]
    fn test_downcast_through_any() {
        let mut cell: Box<dyn Cell> = Box::new(ValueCell::default());

        let concrete = cell.as_any_mut().downcast_mut::<ValueCell>();
        assert!(concrete.is_some());
        concrete.unwrap().set_text("iOS Programming");

        assert!(cell.as_any().downcast_ref::<TextCell>().is_none());
        assert_eq!(
            cell.as_any().downcast_ref::<ValueCell>().unwrap().text(),
            Some("iOS Programming")
        );
    }

    #[test]
    fn test_display_rendering() {
        let mut cell = SubtitleCell::default();
        cell.set_text("iOS Dev");
        cell.set_detail_text("10.01.2020");
        assert_eq!(cell.to_string(), "iOS Dev\n  10.01.2020");

        let mut value = ValueCell::default();
        value.set_text("Total");
        value.set_detail_text("42");
        assert_eq!(value.to_string(), "Total | 42");
    }
}
