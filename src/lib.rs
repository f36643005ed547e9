pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod message;
pub mod providers;
pub mod report;
pub mod rules;
pub mod sarif;
pub mod taxonomy;
pub mod types;
pub mod util;

pub use convert::{convert, InputShape, ScanInput};
pub use error::{ConverterError, Result};
pub use sarif::{combine, SarifLog, SarifVersion};
pub use types::axe::{DecoratedInput, DecoratedResults, RawRuleResult};
pub use types::environment::{ConverterOptions, EnvironmentData};
