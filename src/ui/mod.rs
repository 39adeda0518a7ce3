/// UI building blocks for the page
///
/// - `carousel` - hero image slides with previous/next navigation
/// - `pie_chart` - canvas pie chart with legend
/// - `breed_card` - cards for the breed list
/// - `toast` - transient notification
/// - `icons` - canvas-drawn paw and magnifier
/// - `theme` - palettes and container styles

pub mod breed_card;
pub mod carousel;
pub mod icons;
pub mod pie_chart;
pub mod theme;
pub mod toast;
