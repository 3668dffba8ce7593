use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, pantry::entities::Pantry};

/// Service trait for pantry submissions
#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn submit_pantry(
        &self,
        pantry: Pantry,
    ) -> impl Future<Output = Result<Pantry, CoreError>> + Send;
}
