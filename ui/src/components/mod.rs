pub mod ctas;
pub mod footer;
pub mod header;
pub mod icons;
pub mod lang_switch;
pub mod link;
pub mod menu_dropdown;

pub use footer::Footer;
pub use header::Header;
