/// Use cases module containing application business logic orchestration
mod verify_charts;

pub use verify_charts::VerifyChartsUseCase;
