pub mod blob;
pub mod user;

pub use blob::BlobKind;
pub use user::{Credentials, PublicUser, UserRecord};
