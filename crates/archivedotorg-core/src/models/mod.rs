pub mod collection;
pub mod identifier;
pub mod metadata;
pub mod save;
pub mod upload;

pub use collection::Collection;
pub use identifier::IdentifierResponse;
pub use metadata::Metadata;
pub use save::SaveOptions;
pub use upload::UploadOptions;
