use crate::core::data::colour::Colour;

/// Turns one kernel result into a colour. Total: every value has a colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
