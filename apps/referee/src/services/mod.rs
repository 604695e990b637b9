pub mod intake;
pub mod referee;

pub use intake::{Detection, Intake, IntakeOutcome, RejectReason};
pub use referee::Referee;
