/// Business logic layer for blog-service
///
/// - Post service: post creation, retrieval, updates and deletion
pub mod posts;

pub use posts::PostService;
