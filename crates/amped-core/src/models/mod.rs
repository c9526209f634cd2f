pub mod category;
pub mod color;
pub mod estimate;
pub mod record;
pub mod trade;
