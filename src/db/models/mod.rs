// Declare model modules
pub mod column_description;
pub mod subscription_plan;
pub mod user;
