//! Карта регионов с агрегатами по получателям
//!
//! Simplified MVVM pattern implementation:
//! - api.rs: API functions (региональные агрегаты)
//! - view_model.rs: состояние подсветки и поиска региона
//! - view.rs: Leptos-компонент карты с оверлеем

mod api;
mod view;
mod view_model;

pub use view::RegionMapView;
pub use view_model::{HighlightedRegion, RegionMapViewModel};
