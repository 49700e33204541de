pub mod error_banner;
pub mod header;
pub mod pdf_viewer;
pub mod results_list;
pub mod upload_area;
