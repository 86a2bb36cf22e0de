pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EXTERNAL_CATALOG_BASE_URL, TEST_IMAGE_URL_PLACEHOLDER},
        fixtures::catalog::factory,
        TestBuilder, TestContext, TestError,
    };
}
