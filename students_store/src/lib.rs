pub mod ids;
pub mod record;
pub mod repository;
pub mod storage;
pub mod view;
