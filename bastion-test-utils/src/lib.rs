pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod factory;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::*, factory, TestBuilder, TestContext, TestError};
}
