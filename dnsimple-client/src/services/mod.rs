//! API services, one per resource family
//!
//! Each service borrows the [`Client`](crate::Client) and exposes one method
//! per API action. Methods build the versioned path, issue a single request
//! and return the decoded [`Response`](crate::Response).

mod domains;
mod registrar;
mod templates;

pub use domains::DomainsService;
pub use registrar::RegistrarService;
pub use templates::TemplatesService;
