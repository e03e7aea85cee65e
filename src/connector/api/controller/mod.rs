pub mod analyze_controller;
pub mod guide_controller;
pub mod status_controller;

pub use analyze_controller::AnalyzeController;
pub use guide_controller::GuideController;
pub use status_controller::StatusController;
