pub mod csproj;
pub mod error;
pub mod files;
pub mod platform;
