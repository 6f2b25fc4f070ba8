pub mod addons;
pub mod anchor;
pub mod classify;
pub mod discounts;
pub mod preview;
pub mod tax;
pub mod timeline;
