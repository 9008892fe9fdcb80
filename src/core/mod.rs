//! Pure decision logic: query classification, routing, search mode.

pub mod entity;
pub mod error;
pub mod mode;
pub mod query;
pub mod route;

/// Seam between the resolution engine and whatever owns the active view.
pub trait Navigator {
    /// Change the active view to the given path.
    fn navigate(&mut self, path: &str);
}
