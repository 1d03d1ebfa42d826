pub mod animation;
pub mod friend_list;
pub mod header;
pub mod skeleton;
pub mod summary;
pub mod theme;
pub mod transactions;
