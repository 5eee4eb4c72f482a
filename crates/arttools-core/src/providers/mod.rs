// Catalog source implementations
pub mod remote;

pub use remote::RemoteCatalog;
