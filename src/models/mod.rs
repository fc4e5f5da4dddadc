pub mod config;
pub mod report;

pub use config::{AppConfig, ConfigSource, ReportConfig, ThemeConfig, CONFIG_ENV_VAR};
pub use report::{
    ColorReport, ContrastReport, DeficiencyView, ExtractReport, LchReport, PaletteReport,
    RankedColor,
};
