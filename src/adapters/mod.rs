// Adapters layer: concrete implementations of the domain ports for the local machine.

pub mod dry_run;
pub mod locator;
pub mod process;
pub mod storage;

pub use dry_run::{DryRunRunner, DryRunStorage};
pub use locator::PathLocator;
pub use process::SystemRunner;
pub use storage::LocalStorage;
