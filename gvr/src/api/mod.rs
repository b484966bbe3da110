#[cfg(feature = "mock")]
pub mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockControlMsg, MockRuntime, MockRuntimeInit};
