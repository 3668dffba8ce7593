use crate::domain::health::entities::ServiceStatus;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn status(&self) -> ServiceStatus;
}
