pub mod fetch;
pub mod images;
pub mod matcher;
pub mod pipeline;
pub mod recommend;
pub mod sort;
