pub mod agent;
pub mod batch;
pub mod config;
pub mod dispute;
pub mod invoice;
pub mod request;
pub mod stream;
pub mod treasury;

pub use agent::*;
pub use batch::*;
pub use config::*;
pub use dispute::*;
pub use invoice::*;
pub use request::*;
pub use stream::*;
pub use treasury::*;
