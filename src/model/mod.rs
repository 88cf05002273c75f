pub mod category;
pub mod record;
pub mod settings;
pub mod status;

pub use category::Category;
pub use record::{Quarter, Record, RecordId};
pub use settings::Settings;
pub use status::Status;
