mod stream;
mod table_file;

pub use stream::Stream;
pub use table_file::TableFileStream;
