pub mod console;
pub mod feature_info;
pub mod map_view;
pub mod places;
