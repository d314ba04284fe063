pub mod config;
pub mod generate;
pub mod preview;
pub mod settings;

pub use generate::{GenerateLogic, GenerateReport};
pub use preview::PreviewLogic;
pub use settings::ChartSettings;
