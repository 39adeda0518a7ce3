/// State management module
///
/// This module handles all page state, including:
/// - Static page content (data.rs)
/// - Breed search and filtering (search.rs)
/// - Carousel navigation (carousel.rs)
/// - Toast notifications (toast.rs)
/// - Entrance and cursor-follow motion (motion.rs)
/// - User settings (settings.rs)

pub mod carousel;
pub mod data;
pub mod motion;
pub mod search;
pub mod settings;
pub mod toast;
