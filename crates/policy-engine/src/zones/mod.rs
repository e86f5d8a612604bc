pub mod denylist;
