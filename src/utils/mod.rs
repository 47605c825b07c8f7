pub mod date;
pub mod logging;
pub mod oplog;
pub mod path;
pub mod table;
pub mod time;
pub mod validators;
