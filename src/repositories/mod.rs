pub mod attendance_repo;
pub mod auth_repo;
pub mod membership_repo;
pub mod payment_repo;
pub mod plan_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepository;
pub use auth_repo::AuthRepository;
pub use membership_repo::MembershipRepository;
pub use payment_repo::PaymentRepository;
pub use plan_repo::{DietPlanRepository, WorkoutPlanRepository};
pub use user_repo::UserRepository;
