//! Resource facades: typed operations over the REST surface
//!
//! One facade per entity family, each a stateless translation from a
//! typed call to a dispatcher call with a specific path and payload.

mod groups;
mod permissions;
mod roles;
mod users;

pub use groups::Groups;
pub use permissions::Permissions;
pub use roles::Roles;
pub use users::Users;
