pub mod about;
pub mod feedback;
pub mod landing;
pub mod mobile;
pub mod not_found;
pub mod result;
pub mod store;
