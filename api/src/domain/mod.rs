pub mod record;
pub mod view;
