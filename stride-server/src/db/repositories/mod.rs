mod activity_repository;
mod analytics_repository;
mod comment_repository;
mod follower_repository;
mod kudos_repository;
mod user_repository;

pub use activity_repository::ActivityRepository;
pub use analytics_repository::AnalyticsRepository;
pub use comment_repository::CommentRepository;
pub use follower_repository::FollowerRepository;
pub use kudos_repository::KudosRepository;
pub use user_repository::UserRepository;
