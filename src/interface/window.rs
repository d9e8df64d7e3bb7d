use crate::model::icon::IconImage;

/// The part of a live native window that startup initializers may touch.
pub trait WindowHandle {
    fn set_icon(&mut self, icon: IconImage);
}
