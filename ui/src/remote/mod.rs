pub mod decode;
mod list;
mod loader;
mod source;

pub use list::{RemoteList, use_remote_list, use_remote_list_from};
pub use loader::RemoteListLoader;
pub use source::{HttpSource, JsonSource};
