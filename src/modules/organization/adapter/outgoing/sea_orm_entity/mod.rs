pub mod followers;
pub mod organizations;
pub mod venues;
