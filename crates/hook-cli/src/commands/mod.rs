pub mod dispatch;
pub mod install;
pub mod list;
pub mod print;
pub mod test;

mod shared;
